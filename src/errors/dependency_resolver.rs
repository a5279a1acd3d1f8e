use alloc::{boxed::Box, vec::Vec};

use super::{instantiate::InstantiateErrorKind, instantiator::InstantiatorErrorKind, ErrorCode};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Provider with {dependency} not found")]
    DependencyNotFound { dependency: TypeInfo },
    #[error("Incorrect instance type. Expected: {expected}, found: {actual}")]
    IncorrectType { expected: TypeInfo, actual: TypeInfo },
    #[error("Cyclic dependency detected: {}", display_chain(chain))]
    CyclicDependency { chain: Vec<TypeInfo> },
    #[error(transparent)]
    Instantiator(InstantiatorErrorKind<Box<ResolveErrorKind>, InstantiateErrorKind>),
}

impl ResolveErrorKind {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveErrorKind::DependencyNotFound { .. } => ErrorCode::DependencyNotFound,
            ResolveErrorKind::IncorrectType { .. } => ErrorCode::ContractViolation,
            ResolveErrorKind::CyclicDependency { .. } => ErrorCode::CyclicDependency,
            ResolveErrorKind::Instantiator(InstantiatorErrorKind::Deps(err)) => err.code(),
            ResolveErrorKind::Instantiator(InstantiatorErrorKind::Factory(_)) => ErrorCode::Instantiation,
        }
    }
}

fn display_chain(chain: &[TypeInfo]) -> alloc::string::String {
    chain.iter().map(TypeInfo::short_name).collect::<Vec<_>>().join(" -> ")
}
