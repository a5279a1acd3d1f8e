mod cache;
mod container;
mod dependency_resolver;
mod element;
mod instantiate;
mod instantiator;

use core::fmt::{self, Display, Formatter};

pub use cache::CacheErrorKind;
pub use container::ContainerErrorKind;
pub use dependency_resolver::ResolveErrorKind;
pub use element::ElementErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use instantiator::InstantiatorErrorKind;

/// Category of a failure, shared by every error kind of the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Element is missing kind, token or metadata, or isn't of the expected kind
    InvalidElement,
    /// Lookup by token or type yielded nothing
    NotFound,
    /// Module declared without config or metadata
    Configuration,
    /// A dependency of a component couldn't be satisfied
    DependencyNotFound,
    /// Adapter doesn't implement its port, or a declaration got an element of the wrong kind
    ContractViolation,
    /// Import or component cycle
    CyclicDependency,
    /// A factory returned an error
    Instantiation,
}

impl ErrorCode {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidElement => "INVALID_ELEMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Configuration => "CONFIGURATION",
            ErrorCode::DependencyNotFound => "DEPENDENCY_NOT_FOUND",
            ErrorCode::ContractViolation => "CONTRACT_VIOLATION",
            ErrorCode::CyclicDependency => "CYCLIC_DEPENDENCY",
            ErrorCode::Instantiation => "INSTANTIATION",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
