#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod cache;
pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod context;
pub(crate) mod dependency_resolver;
pub(crate) mod element;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod module;
pub(crate) mod resolution;

pub mod introspection;

pub use any::{Instance, TypeInfo};
pub use cache::Cache;
pub use component::Component;
pub use config::{Config, ImportPolicy};
pub use container::Container;
pub use context::ResolveContext;
pub use dependency_resolver::DependencyResolver;
pub use element::{Element, ElementBuilder, Kind, Metadata, Operation};
pub use errors::{
    CacheErrorKind, ContainerErrorKind, ElementErrorKind, ErrorCode, InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind,
};
pub use inject::Inject;
pub use instantiator::{instance, Instantiator};
pub use module::{Module, ModuleBuilder};
pub use resolution::{Resolution, Resolutions, Role};

#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
}
