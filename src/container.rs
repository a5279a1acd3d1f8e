use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use core::{
    any::type_name,
    fmt::{self, Debug, Formatter},
};
use tracing::{debug, error, info, info_span};

use crate::{
    any::TypeInfo,
    cache::Cache,
    context::ResolveContext,
    element::Element,
    errors::ContainerErrorKind,
    module::Module,
    resolution::{Resolution, Resolutions, Role},
};

struct ContainerInner {
    module: Module,
    resolutions: Arc<Resolutions>,
}

/// Built module: resolutions of its components by token.
/// Cheap to clone, clones share the resolutions.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Container {
    /// Builds the module using [`Cache::global`]
    ///
    /// # Errors
    /// See [`Container::new_in`]
    #[inline]
    pub fn new(module: &Module) -> Result<Self, ContainerErrorKind> {
        Self::new_in(Cache::global(), module)
    }

    /// Builds the module and registers the container in the cache.
    ///
    /// # Resolution order
    /// 1. Exports of imported containers are merged, imports missing in the cache are built first.
    ///    Their role is decided by the module's [`ImportPolicy`](crate::ImportPolicy).
    /// 2. If a container with the same token is cached, its resolutions are adopted and nothing else is done.
    /// 3. Providers then exports are resolved. A provider already built by another cached container is reused.
    /// 4. The container is registered in the cache.
    ///
    /// # Errors
    /// - Returns [`ContainerErrorKind::CyclicImport`] if the module imports itself, directly or not
    /// - Returns [`ContainerErrorKind::Resolve`] if one of the components can't be built
    /// - Returns errors of the imported modules
    pub fn new_in(cache: &Cache, module: &Module) -> Result<Self, ContainerErrorKind> {
        let span = info_span!("build", container = module.token());
        let _guard = span.enter();

        let _resolving = cache.enter(module.token())?;

        let config = module.config();
        let mut resolutions = Resolutions::new();

        for import in config.get_imports() {
            let imported = if let Some(imported) = cache.get(import.element())? {
                debug!(import = import.token(), "Import found in cache");
                imported
            } else {
                debug!(import = import.token(), "Import not found in cache");
                let imported = Self::new_in(cache, import)?;
                info!(import = import.token(), "Import resolved");
                imported
            };

            for resolution in imported.exports().into_values() {
                if config.re_export && resolution.role == Role::Export {
                    debug!(token = %resolution.token, "Re-export of imported export");
                }

                let mut resolution = resolution.clone();
                resolution.role = config.import_policy.role(config.re_export);
                resolution.origin = Some(String::from(imported.token()));
                resolution.from_cache = true;
                resolutions.insert(resolution.token.clone(), resolution);
            }
        }

        if let Some(cached) = cache.get_by_token(module.token()) {
            info!("Resolved from cache");
            return Ok(Self {
                inner: Arc::new(ContainerInner {
                    module: module.clone(),
                    resolutions: cached.inner.resolutions.clone(),
                }),
            });
        }

        for component in config.components() {
            let resolution = if let Some(mut resolution) = cache.get_provider(component) {
                debug!(token = component.token(), "Found in cache");
                resolution.role = if config.is_export(component) && config.re_export {
                    Role::Export
                } else {
                    Role::Provider
                };
                resolution.from_cache = true;
                resolution
            } else {
                debug!(token = component.token(), "Not found in cache");
                let context = ResolveContext::new(config, &resolutions);
                let (instance, dependencies) = match context.instantiate(component) {
                    Ok(built) => built,
                    Err(source) => {
                        let err = ContainerErrorKind::Resolve {
                            token: component.token().into(),
                            source,
                        };
                        error!("{}", err);
                        return Err(err);
                    }
                };
                Resolution {
                    token: component.token().into(),
                    role: if config.is_provider(component) { Role::Provider } else { Role::Export },
                    instance,
                    type_info: component.type_info(),
                    dependencies,
                    origin: None,
                    from_cache: false,
                }
            };
            resolutions.insert(resolution.token.clone(), resolution);
        }

        let container = Self {
            inner: Arc::new(ContainerInner {
                module: module.clone(),
                resolutions: Arc::new(resolutions),
            }),
        };
        cache.add(container.clone());

        info!("Container resolved");

        Ok(container)
    }

    /// Gets the shared instance of `Dep`.
    ///
    /// The lookup is by provided type, not by token: the first resolution holding a `Dep`
    /// in token order is returned if several do. Use [`Container::resolution`] to look up by token.
    ///
    /// # Errors
    /// Returns [`ContainerErrorKind::NotFound`] if no resolution holds a `Dep`
    pub fn get<Dep: Send + Sync + 'static>(&self) -> Result<Arc<Dep>, ContainerErrorKind> {
        let span = info_span!("get", dependency = type_name::<Dep>(), container = self.token());
        let _guard = span.enter();

        let type_info = TypeInfo::of::<Dep>();

        match self
            .inner
            .resolutions
            .values()
            .find(|resolution| resolution.is(&type_info))
            .and_then(Resolution::downcast::<Dep>)
        {
            Some(dependency) => {
                debug!("Found");
                Ok(dependency)
            }
            None => {
                let err = ContainerErrorKind::NotFound { dependency: type_info };
                error!("{}", err);
                Err(err)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn resolution(&self, token: &str) -> Option<&Resolution> {
        self.inner.resolutions.get(token)
    }

    #[inline]
    #[must_use]
    pub fn resolutions(&self) -> &Resolutions {
        &self.inner.resolutions
    }

    #[must_use]
    pub fn providers(&self) -> BTreeMap<&str, &Resolution> {
        self.with_role(Role::Provider)
    }

    #[must_use]
    pub fn exports(&self) -> BTreeMap<&str, &Resolution> {
        self.with_role(Role::Export)
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        self.inner.module.token()
    }

    #[inline]
    #[must_use]
    pub fn element(&self) -> &Element {
        self.inner.module.element()
    }

    #[inline]
    #[must_use]
    pub fn module(&self) -> &Module {
        &self.inner.module
    }

    fn with_role(&self, role: Role) -> BTreeMap<&str, &Resolution> {
        self.inner
            .resolutions
            .iter()
            .filter(|(_, resolution)| resolution.role == role)
            .map(|(token, resolution)| (token.as_str(), resolution))
            .collect()
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let providers: Vec<&str> = self.providers().into_keys().collect();
        let exports: Vec<&str> = self.exports().into_keys().collect();

        write!(f, "<{}: (providers={:?}, exports={:?})>", self.token(), providers, exports)
    }
}
