use alloc::{string::String, sync::Arc};
use core::fmt::{self, Debug, Formatter};
use tracing::error;

use crate::{
    config::Config,
    element::{Element, Metadata},
    errors::ContainerErrorKind,
};

struct ModuleInner {
    element: Element,
    config: Config,
}

/// Declaration of a container: its element and config.
/// Cheap to clone, clones share the declaration.
#[derive(Clone)]
pub struct Module {
    inner: Arc<ModuleInner>,
}

impl Module {
    #[inline]
    #[must_use]
    pub fn builder(token: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder {
            token: token.into(),
            metadata: None,
            config: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.inner.element
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        self.inner.element.token()
    }

    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        self.inner.element.metadata()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

impl Debug for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("element", &self.inner.element)
            .field("providers", &self.inner.config.get_providers())
            .field("exports", &self.inner.config.get_exports())
            .field("imports", &self.inner.config.get_imports().len())
            .finish()
    }
}

pub struct ModuleBuilder {
    token: String,
    metadata: Option<Metadata>,
    config: Option<Config>,
}

impl ModuleBuilder {
    #[inline]
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[inline]
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    /// - Returns [`ContainerErrorKind::MissingConfig`] if the config isn't set
    /// - Returns [`ContainerErrorKind::MissingMetadata`] if the metadata isn't set
    pub fn build(self) -> Result<Module, ContainerErrorKind> {
        let Some(config) = self.config else {
            let err = ContainerErrorKind::MissingConfig { token: self.token };
            error!("{}", err);
            return Err(err);
        };
        let Some(metadata) = self.metadata else {
            let err = ContainerErrorKind::MissingMetadata { token: self.token };
            error!("{}", err);
            return Err(err);
        };

        Ok(Module {
            inner: Arc::new(ModuleInner {
                element: Element::container(self.token, metadata),
                config,
            }),
        })
    }
}
