use alloc::vec::Vec;

use super::errors::ResolveErrorKind;
use crate::{any::TypeInfo, context::ResolveContext};

/// Parameter of an instantiator, resolved from the container being built
pub trait DependencyResolver: Sized {
    type Error: Into<ResolveErrorKind>;

    fn resolve(context: &ResolveContext<'_>) -> Result<Self, Self::Error>;

    #[inline]
    #[must_use]
    fn type_info() -> TypeInfo
    where
        Self: 'static,
    {
        TypeInfo::of::<Self>()
    }

    /// Pushes types requested by the resolver, used to describe a component before it's built
    #[inline]
    fn dependencies(dependencies: &mut Vec<TypeInfo>)
    where
        Self: 'static,
    {
        dependencies.push(Self::type_info());
    }
}

macro_rules! impl_dependency_resolver {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut)]
        impl<$($ty,)*> DependencyResolver for ($($ty,)*)
        where
            $( $ty: DependencyResolver<Error = ResolveErrorKind> + 'static, )*
        {
            type Error = ResolveErrorKind;

            #[inline]
            #[allow(unused_variables)]
            fn resolve(context: &ResolveContext<'_>) -> Result<Self, Self::Error> {
                Ok(($($ty::resolve(context)?,)*))
            }

            #[inline]
            #[allow(unused_variables)]
            fn dependencies(dependencies: &mut Vec<TypeInfo>) {
                $( $ty::dependencies(dependencies); )*
            }
        }
    };
}

all_the_tuples!(impl_dependency_resolver);
