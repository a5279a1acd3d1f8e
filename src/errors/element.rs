use alloc::string::String;

use super::ErrorCode;
use crate::element::Kind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementErrorKind {
    #[error("Property `kind` not found")]
    MissingKind,
    #[error("Property `token` not found")]
    MissingToken,
    #[error("Property `metadata` not found")]
    MissingMetadata,
    #[error("Element `{token}` is {actual}, expected one of: {expected:?}")]
    UnexpectedKind {
        token: String,
        expected: &'static [Kind],
        actual: Kind,
    },
    #[error("Method `{port}.{operation}` is not implemented")]
    NotImplemented { port: String, operation: String },
}

impl ElementErrorKind {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            ElementErrorKind::MissingKind | ElementErrorKind::MissingToken | ElementErrorKind::MissingMetadata => {
                ErrorCode::InvalidElement
            }
            ElementErrorKind::UnexpectedKind { .. } | ElementErrorKind::NotImplemented { .. } => ErrorCode::ContractViolation,
        }
    }
}
