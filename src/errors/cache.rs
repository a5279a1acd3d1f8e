use alloc::string::String;

use super::ErrorCode;
use crate::element::Kind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheErrorKind {
    #[error("Element `{token}` must be a container, found {kind}")]
    NotContainer { token: String, kind: Kind },
    #[error("Container with token `{token}` not found")]
    NotFound { token: String },
}

impl CacheErrorKind {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            CacheErrorKind::NotContainer { .. } => ErrorCode::InvalidElement,
            CacheErrorKind::NotFound { .. } => ErrorCode::NotFound,
        }
    }
}
