use alloc::sync::Arc;

use crate::{any::TypeInfo, context::ResolveContext, dependency_resolver::DependencyResolver, ResolveErrorKind};

/// Shared instance of `Dep`: a port (`Box<dyn Port>`) or a service
pub struct Inject<Dep>(pub Arc<Dep>);

impl<Dep: Send + Sync + 'static> DependencyResolver for Inject<Dep> {
    type Error = ResolveErrorKind;

    fn resolve(context: &ResolveContext<'_>) -> Result<Self, Self::Error> {
        context.get().map(Self)
    }

    fn type_info() -> TypeInfo {
        TypeInfo::of::<Dep>()
    }
}
