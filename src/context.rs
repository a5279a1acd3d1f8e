use alloc::{boxed::Box, format, string::String, sync::Arc, vec::Vec};
use core::{any::type_name, cell::RefCell};
use tracing::{debug, debug_span, error};

use crate::{
    any::{Instance, TypeInfo},
    component::Component,
    config::Config,
    errors::{InstantiatorErrorKind, ResolveErrorKind},
    resolution::Resolutions,
};

struct Frame {
    type_info: TypeInfo,
    dependencies: Vec<String>,
}

/// Context passed to dependency resolvers while a container resolves its components.
///
/// A requested type is looked up in the declared components first (a fresh instance is built),
/// then in the resolutions already merged or built by the container.
pub struct ResolveContext<'a> {
    config: &'a Config,
    resolutions: &'a Resolutions,
    frames: RefCell<Vec<Frame>>,
}

impl<'a> ResolveContext<'a> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(config: &'a Config, resolutions: &'a Resolutions) -> Self {
        Self {
            config,
            resolutions,
            frames: RefCell::new(Vec::new()),
        }
    }

    /// Builds the component, returns its instance and descriptions of its resolved dependencies
    pub(crate) fn instantiate(&self, component: &Component) -> Result<(Instance, Vec<String>), ResolveErrorKind> {
        let type_info = component.type_info();

        {
            let frames = self.frames.borrow();
            if frames.iter().any(|frame| frame.type_info == type_info) {
                let mut chain: Vec<TypeInfo> = frames
                    .iter()
                    .map(|frame| frame.type_info)
                    .skip_while(|frame| *frame != type_info)
                    .collect();
                chain.push(type_info);

                let err = ResolveErrorKind::CyclicDependency { chain };
                error!("{}", err);
                return Err(err);
            }
        }

        self.frames.borrow_mut().push(Frame {
            type_info,
            dependencies: Vec::new(),
        });
        let result = (component.instantiator())(self);
        let dependencies = self.frames.borrow_mut().pop().map(|frame| frame.dependencies).unwrap_or_default();

        match result {
            Ok(instance) => Ok((instance, dependencies)),
            Err(InstantiatorErrorKind::Deps(err)) => {
                error!("{}", err);
                Err(ResolveErrorKind::Instantiator(InstantiatorErrorKind::Deps(Box::new(err))))
            }
            Err(InstantiatorErrorKind::Factory(err)) => {
                error!("{}", err);
                Err(ResolveErrorKind::Instantiator(InstantiatorErrorKind::Factory(err)))
            }
        }
    }

    /// Resolves a dependency of the component being built
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::DependencyNotFound`] if neither a declared component nor a resolution provides `Dep`
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if `Dep` is requested while it's being built
    /// - Returns [`ResolveErrorKind::Instantiator`] if building `Dep` failed
    pub fn get<Dep: Send + Sync + 'static>(&self) -> Result<Arc<Dep>, ResolveErrorKind> {
        let span = debug_span!("resolve", dependency = type_name::<Dep>());
        let _guard = span.enter();

        let type_info = TypeInfo::of::<Dep>();

        let (instance, actual, token) =
            if let Some(component) = self.config.components().find(|component| component.provides(&type_info)) {
                debug!("Found in declared components");
                let (instance, _) = self.instantiate(component)?;
                (instance, component.type_info(), component.token())
            } else if let Some(resolution) = self.resolutions.values().find(|resolution| resolution.is(&type_info)) {
                debug!("Found in resolutions");
                (resolution.instance().clone(), resolution.type_info(), resolution.token())
            } else {
                let err = ResolveErrorKind::DependencyNotFound { dependency: type_info };
                error!("{}", err);
                return Err(err);
            };

        let description = format!("<{}, {}>", type_info.short_name(), token);
        match instance.downcast::<Dep>() {
            Ok(dependency) => {
                if let Some(frame) = self.frames.borrow_mut().last_mut() {
                    frame.dependencies.push(description);
                }
                Ok(dependency)
            }
            Err(_) => {
                let err = ResolveErrorKind::IncorrectType { expected: type_info, actual };
                error!("{}", err);
                Err(err)
            }
        }
    }
}
