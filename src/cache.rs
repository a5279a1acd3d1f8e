use alloc::{collections::BTreeMap, string::String, vec::Vec};
use parking_lot::{const_mutex, Mutex};
use tracing::{debug, error};

use crate::{
    component::Component,
    container::Container,
    element::{Element, Kind},
    errors::{CacheErrorKind, ContainerErrorKind},
    resolution::{Resolution, Role},
};

static GLOBAL_CACHE: Cache = Cache::new();

/// Registry of built containers by token.
///
/// A container is built once per cache: building a module whose token is already cached
/// adopts the cached resolutions. Locks are never held while a container is being built.
pub struct Cache {
    containers: Mutex<BTreeMap<String, Container>>,
    resolving: Mutex<Vec<String>>,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            containers: const_mutex(BTreeMap::new()),
            resolving: const_mutex(Vec::new()),
        }
    }

    /// Cache shared by the whole process, used by [`Container::new`]
    #[inline]
    #[must_use]
    pub fn global() -> &'static Cache {
        &GLOBAL_CACHE
    }

    /// Registers the container, returns the container previously registered with the same token
    pub fn add(&self, container: Container) -> Option<Container> {
        let token = String::from(container.token());
        debug!(token = %token, "Container cached");
        self.containers.lock().insert(token, container)
    }

    /// # Errors
    /// Returns [`CacheErrorKind::NotContainer`] if the element isn't a container
    pub fn get(&self, element: &Element) -> Result<Option<Container>, CacheErrorKind> {
        if element.kind() != Kind::Container {
            let err = CacheErrorKind::NotContainer {
                token: element.token().into(),
                kind: element.kind(),
            };
            error!("{}", err);
            return Err(err);
        }
        Ok(self.get_by_token(element.token()))
    }

    /// # Errors
    /// - Returns [`CacheErrorKind::NotContainer`] if the element isn't a container
    /// - Returns [`CacheErrorKind::NotFound`] if the container isn't cached
    pub fn try_get(&self, element: &Element) -> Result<Container, CacheErrorKind> {
        match self.get(element)? {
            Some(container) => Ok(container),
            None => {
                let err = CacheErrorKind::NotFound {
                    token: element.token().into(),
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn get_by_token(&self, token: &str) -> Option<Container> {
        self.containers.lock().get(token).cloned()
    }

    /// Finds a resolution of the component among providers of the cached containers.
    /// Exports aren't looked up.
    #[must_use]
    pub fn get_provider(&self, component: &Component) -> Option<Resolution> {
        let containers = self.containers.lock();
        for container in containers.values() {
            if let Some(resolution) = container.resolution(component.token()) {
                if resolution.role() == Role::Provider {
                    debug!(token = %component.token(), container = %container.token(), "Provider found in cache");
                    return Some(resolution.clone());
                }
            }
        }
        None
    }

    pub fn clear(&self) {
        self.containers.lock().clear();
        debug!("Cache cleared");
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.lock().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.lock().is_empty()
    }

    /// Tokens of the cached containers in order
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.containers.lock().keys().cloned().collect()
    }

    /// Marks the token as being resolved until the guard is dropped
    ///
    /// # Errors
    /// Returns [`ContainerErrorKind::CyclicImport`] if the token is already being resolved
    pub(crate) fn enter(&self, token: &str) -> Result<ResolvingGuard<'_>, ContainerErrorKind> {
        let mut resolving = self.resolving.lock();
        if let Some(position) = resolving.iter().position(|resolving| resolving == token) {
            let mut chain = resolving[position..].to_vec();
            chain.push(token.into());

            let err = ContainerErrorKind::CyclicImport { chain };
            error!("{}", err);
            return Err(err);
        }
        resolving.push(token.into());

        Ok(ResolvingGuard { cache: self })
    }
}

pub(crate) struct ResolvingGuard<'a> {
    cache: &'a Cache,
}

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        self.cache.resolving.lock().pop();
    }
}
