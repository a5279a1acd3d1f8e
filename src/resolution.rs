use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use core::fmt::{self, Display, Formatter};

use crate::any::{Instance, TypeInfo};

/// Visibility of a resolved component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Private to its container
    Provider,
    /// Exposed to importers
    Export,
}

impl Role {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Provider => "provider",
            Role::Export => "export",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolutions of a container by token
pub type Resolutions = BTreeMap<String, Resolution>;

/// Record of one built component: the shared instance, its role and provenance
#[derive(Debug, Clone)]
pub struct Resolution {
    pub(crate) token: String,
    pub(crate) role: Role,
    pub(crate) instance: Instance,
    pub(crate) type_info: TypeInfo,
    pub(crate) dependencies: Vec<String>,
    pub(crate) origin: Option<String>,
    pub(crate) from_cache: bool,
}

impl Resolution {
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Type-erased instance, shared with every consumer
    #[inline]
    #[must_use]
    pub const fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Typed instance, `None` if the instance isn't a `T`
    #[inline]
    #[must_use]
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instance.clone().downcast().ok()
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Descriptions of the resolved dependencies in `<type, token>` form
    #[inline]
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Token of the container the resolution was imported from
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn from_cache(&self) -> bool {
        self.from_cache
    }

    #[inline]
    #[must_use]
    pub(crate) fn is(&self, type_info: &TypeInfo) -> bool {
        self.type_info == *type_info
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, type={}, deps={:?}, origin={:?}, cache={}>",
            self.type_info.short_name(),
            self.role,
            self.dependencies,
            self.origin,
            self.from_cache,
        )
    }
}
