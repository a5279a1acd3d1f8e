use alloc::{string::String, vec::Vec};

use super::{CacheErrorKind, ErrorCode, ResolveErrorKind};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ContainerErrorKind {
    #[error("Container `{token}` must have a config")]
    MissingConfig { token: String },
    #[error("Container `{token}` must have a metadata")]
    MissingMetadata { token: String },
    #[error("Provider with {dependency} not found")]
    NotFound { dependency: TypeInfo },
    #[error("Cyclic import detected: {}", chain.join(" -> "))]
    CyclicImport { chain: Vec<String> },
    #[error("Failed to resolve `{token}`: {source}")]
    Resolve {
        token: String,
        #[source]
        source: ResolveErrorKind,
    },
    #[error(transparent)]
    Cache(#[from] CacheErrorKind),
}

impl ContainerErrorKind {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ContainerErrorKind::MissingConfig { .. } | ContainerErrorKind::MissingMetadata { .. } => ErrorCode::Configuration,
            ContainerErrorKind::NotFound { .. } => ErrorCode::NotFound,
            ContainerErrorKind::CyclicImport { .. } => ErrorCode::CyclicDependency,
            ContainerErrorKind::Resolve { source, .. } => source.code(),
            ContainerErrorKind::Cache(err) => err.code(),
        }
    }
}
