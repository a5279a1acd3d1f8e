//! Validation utilities over element declarations.
//!
//! The compiler already checks that a concrete type implements every method of a port trait,
//! these helpers check the declared surface of the elements, so a port and its adapters agree
//! on the operations registered in a container.

use alloc::{string::String, vec::Vec};
use tracing::error;

use crate::{
    element::{Element, ElementBuilder, Kind},
    errors::ElementErrorKind,
};

/// Checks that a partial declaration looks like an element: it has a kind and a token.
/// Metadata isn't checked here, use [`ElementBuilder::build`] for the full validation.
///
/// # Errors
/// - Returns [`ElementErrorKind::MissingKind`] if the kind isn't set
/// - Returns [`ElementErrorKind::MissingToken`] if the token isn't set
pub fn is_element_or_raise(candidate: &ElementBuilder) -> Result<(), ElementErrorKind> {
    if candidate.kind.is_none() {
        let err = ElementErrorKind::MissingKind;
        error!("{}", err);
        return Err(err);
    }
    if candidate.token.is_none() {
        let err = ElementErrorKind::MissingToken;
        error!("{}", err);
        return Err(err);
    }
    Ok(())
}

/// Returns `true` if the element has at least one unimplemented operation
#[inline]
#[must_use]
pub fn is_abstract(element: &Element) -> bool {
    element.operations().iter().any(|operation| operation.is_abstract)
}

/// Returns names of the operations still marked abstract
#[must_use]
pub fn abstract_methods(element: &Element) -> Vec<&str> {
    element
        .operations()
        .iter()
        .filter(|operation| operation.is_abstract)
        .map(|operation| operation.name.as_str())
        .collect()
}

/// Checks that `implemented` covers every abstract operation of `port`
///
/// # Errors
/// - Returns [`ElementErrorKind::UnexpectedKind`] if `port` isn't a port
/// - Returns [`ElementErrorKind::NotImplemented`] for the first operation missing in `implemented`
pub fn check_adapter(port: &Element, implemented: &[String]) -> Result<(), ElementErrorKind> {
    if port.kind() != Kind::Port {
        let err = ElementErrorKind::UnexpectedKind {
            token: port.token().into(),
            expected: &[Kind::Port],
            actual: port.kind(),
        };
        error!("{}", err);
        return Err(err);
    }

    for operation in abstract_methods(port) {
        if !implemented.iter().any(|name| name == operation) {
            let err = ElementErrorKind::NotImplemented {
                port: port.token().into(),
                operation: operation.into(),
            };
            error!("{}", err);
            return Err(err);
        }
    }
    Ok(())
}
