use alloc::sync::Arc;
use tracing::debug;

use super::{
    dependency_resolver::DependencyResolver,
    errors::{InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind},
};
use crate::{any::Instance, context::ResolveContext};

/// Factory of a component: takes resolved dependencies and returns the instance
pub trait Instantiator<Deps>: Clone + 'static
where
    Deps: DependencyResolver,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn instantiate(&mut self, dependencies: Deps) -> Result<Self::Provides, Self::Error>;
}

pub(crate) type BoxedInstantiator = Arc<
    dyn Fn(&ResolveContext<'_>) -> Result<Instance, InstantiatorErrorKind<ResolveErrorKind, InstantiateErrorKind>>
        + Send
        + Sync,
>;

#[must_use]
pub(crate) fn boxed_instantiator<Inst, Deps>(instantiator: Inst) -> BoxedInstantiator
where
    Inst: Instantiator<Deps> + Send + Sync,
    Inst::Provides: Send + Sync,
    Deps: DependencyResolver<Error = ResolveErrorKind>,
{
    Arc::new(move |context: &ResolveContext<'_>| {
        let dependencies = match Deps::resolve(context) {
            Ok(dependencies) => dependencies,
            Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
        };
        let dependency = match instantiator.clone().instantiate(dependencies) {
            Ok(dependency) => dependency,
            Err(err) => return Err(InstantiatorErrorKind::Factory(Into::<InstantiateErrorKind>::into(err))),
        };

        debug!("Instantiated");

        Ok(Arc::new(dependency) as Instance)
    })
}

macro_rules! impl_instantiator {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Instantiator<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: DependencyResolver<Error = ResolveErrorKind> + 'static, )*
        {
            type Provides = Response;
            type Error = Err;

            fn instantiate(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_instantiator);

/// Wrapper to create an instantiator that just returns passed value.
/// It can be used when the value was created outside the container.
#[inline]
#[must_use]
pub const fn instance<T: Clone + 'static>(val: T) -> impl Instantiator<(), Provides = T, Error = InstantiateErrorKind> {
    move || Ok(val.clone())
}
