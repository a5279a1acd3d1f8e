use alloc::{string::String, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use tracing::error;

use crate::{
    any::TypeInfo,
    dependency_resolver::DependencyResolver,
    element::{Element, Kind, Metadata},
    errors::{ElementErrorKind, InstantiateErrorKind, ResolveErrorKind},
    instantiator::{boxed_instantiator, BoxedInstantiator, Instantiator},
};

/// Adapter or service declaration: the element and how to build it.
///
/// The capability of a component is the type its instantiator provides,
/// so a dependency request for `T` is satisfied by the component providing `T`.
#[derive(Clone)]
pub struct Component {
    element: Element,
    type_info: TypeInfo,
    dependencies: Vec<TypeInfo>,
    instantiator: BoxedInstantiator,
}

impl Component {
    /// # Errors
    /// Returns [`ElementErrorKind::UnexpectedKind`] if the element is neither an adapter nor a service
    pub fn new<Inst, Deps>(element: Element, instantiator: Inst) -> Result<Self, ElementErrorKind>
    where
        Inst: Instantiator<Deps, Error = InstantiateErrorKind> + Send + Sync,
        Inst::Provides: Send + Sync,
        Deps: DependencyResolver<Error = ResolveErrorKind> + 'static,
    {
        if !matches!(element.kind(), Kind::Adapter | Kind::Service) {
            let err = ElementErrorKind::UnexpectedKind {
                token: element.token().into(),
                expected: &[Kind::Adapter, Kind::Service],
                actual: element.kind(),
            };
            error!("{}", err);
            return Err(err);
        }

        let mut dependencies = Vec::new();
        Deps::dependencies(&mut dependencies);

        Ok(Self {
            element,
            type_info: TypeInfo::of::<Inst::Provides>(),
            dependencies,
            instantiator: boxed_instantiator(instantiator),
        })
    }

    /// Adapter of `port` implementing the `implemented` operations
    ///
    /// # Errors
    /// Returns an error if `port` isn't a port or if one of its operations isn't implemented
    pub fn adapter<Inst, Deps, I, O>(port: &Element, implemented: I, instantiator: Inst) -> Result<Self, ElementErrorKind>
    where
        Inst: Instantiator<Deps, Error = InstantiateErrorKind> + Send + Sync,
        Inst::Provides: Send + Sync,
        Deps: DependencyResolver<Error = ResolveErrorKind> + 'static,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self::new(Element::adapter(port, implemented)?, instantiator)
    }

    #[must_use]
    pub fn service<Inst, Deps>(token: impl Into<String>, metadata: Metadata, instantiator: Inst) -> Self
    where
        Inst: Instantiator<Deps, Error = InstantiateErrorKind> + Send + Sync,
        Inst::Provides: Send + Sync,
        Deps: DependencyResolver<Error = ResolveErrorKind> + 'static,
    {
        let mut dependencies = Vec::new();
        Deps::dependencies(&mut dependencies);

        Self {
            element: Element::service(token, metadata),
            type_info: TypeInfo::of::<Inst::Provides>(),
            dependencies,
            instantiator: boxed_instantiator(instantiator),
        }
    }

    #[inline]
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        self.element.token()
    }

    /// Type of the provided instance
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Types requested by the instantiator, in parameters order
    #[inline]
    #[must_use]
    pub fn dependencies(&self) -> &[TypeInfo] {
        &self.dependencies
    }

    #[inline]
    pub(crate) fn provides(&self, type_info: &TypeInfo) -> bool {
        self.type_info == *type_info
    }

    #[inline]
    pub(crate) const fn instantiator(&self) -> &BoxedInstantiator {
        &self.instantiator
    }
}

/// Components are the same declaration if they share the token and the provided type
impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.type_info == other.type_info && self.element.token() == other.element.token()
    }
}

impl Eq for Component {}

impl Debug for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("element", &self.element)
            .field("type_info", &self.type_info)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Component;
    use crate::{
        any::TypeInfo,
        element::{Element, Kind, Metadata},
        errors::{ElementErrorKind, ErrorCode},
        instance, Inject,
    };

    use alloc::{
        boxed::Box,
        format,
        string::{String, ToString as _},
    };
    use tracing_test::traced_test;

    trait Multiplier: Send + Sync {
        fn multiply(&self, a: f64, b: f64) -> f64;
    }

    struct MultiplierAdapter;

    impl Multiplier for MultiplierAdapter {
        fn multiply(&self, a: f64, b: f64) -> f64 {
            a * b
        }
    }

    struct MultiplierService;

    fn multiplier_port() -> Element {
        Element::port("MultiplierPort", Metadata::new("multiplier", "Multiplies"), ["multiply"])
    }

    #[test]
    #[traced_test]
    fn test_component_declaration() {
        let adapter = Component::adapter(&multiplier_port(), ["multiply"], || {
            Ok(Box::new(MultiplierAdapter) as Box<dyn Multiplier>)
        })
        .unwrap();
        let service = Component::service(
            "MultiplierService",
            Metadata::new("MultiplierService", "Uses the multiplier port"),
            |Inject(_multiplier): Inject<Box<dyn Multiplier>>| Ok(MultiplierService),
        );

        assert_eq!(adapter.token(), "MultiplierPort");
        assert_eq!(adapter.element().kind(), Kind::Adapter);
        assert_eq!(adapter.type_info(), TypeInfo::of::<Box<dyn Multiplier>>());
        assert!(adapter.dependencies().is_empty());

        assert_eq!(service.type_info(), TypeInfo::of::<MultiplierService>());
        assert_eq!(service.dependencies(), [TypeInfo::of::<Box<dyn Multiplier>>()]);
        assert_ne!(adapter, service);
        assert_eq!(service, service.clone());
    }

    #[test]
    #[traced_test]
    fn test_component_wrong_kind() {
        let err = Component::new(multiplier_port(), instance(1u8)).unwrap_err();

        assert!(matches!(err, ElementErrorKind::UnexpectedKind { actual: Kind::Port, .. }));
        assert_eq!(err.code(), ErrorCode::ContractViolation);
    }

    #[test]
    #[traced_test]
    fn test_adapter_not_implemented() {
        let err = Component::adapter(&multiplier_port(), [] as [&str; 0], || {
            Ok(Box::new(MultiplierAdapter) as Box<dyn Multiplier>)
        })
        .unwrap_err();

        assert_eq!(
            err,
            ElementErrorKind::NotImplemented {
                port: "MultiplierPort".to_string(),
                operation: "multiply".to_string(),
            }
        );
    }
}
