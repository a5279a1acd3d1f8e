use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};
use tracing::{debug, error};

use crate::{errors::ElementErrorKind, introspection};

/// Role of an element in a hexagonal application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Port,
    Adapter,
    Service,
    Container,
}

impl Kind {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Port => "port",
            Kind::Adapter => "adapter",
            Kind::Service => "service",
            Kind::Container => "container",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive data of an element. Not used by the resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    /// Semantic version
    pub version: String,
    pub authors: Vec<String>,
}

impl Metadata {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: String::new(),
            authors: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_authors<I, A>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }
}

/// Operation of the declared surface of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub is_abstract: bool,
}

/// Minimal shape of every participant: kind, token and metadata.
///
/// The value can't be built without all three, use [`ElementBuilder`] or one of the shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: Kind,
    token: String,
    metadata: Metadata,
    operations: Vec<Operation>,
}

impl Element {
    #[inline]
    #[must_use]
    pub fn builder() -> ElementBuilder {
        ElementBuilder::new()
    }

    /// Port with the given abstract operations
    #[must_use]
    pub fn port<I, O>(token: impl Into<String>, metadata: Metadata, operations: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            kind: Kind::Port,
            token: token.into(),
            metadata,
            operations: operations
                .into_iter()
                .map(|name| Operation {
                    name: name.into(),
                    is_abstract: true,
                })
                .collect(),
        }
    }

    /// Adapter of the port. The adapter inherits the port token and metadata.
    ///
    /// # Errors
    /// - Returns [`ElementErrorKind::UnexpectedKind`] if `port` isn't a port
    /// - Returns [`ElementErrorKind::NotImplemented`] if one of the port operations isn't in `implemented`
    pub fn adapter<I, O>(port: &Element, implemented: I) -> Result<Self, ElementErrorKind>
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        let implemented: Vec<String> = implemented.into_iter().map(Into::into).collect();
        introspection::check_adapter(port, &implemented)?;

        debug!(token = %port.token, "Adapter checked");

        Ok(Self {
            kind: Kind::Adapter,
            token: port.token.clone(),
            metadata: port.metadata.clone(),
            operations: implemented
                .into_iter()
                .map(|name| Operation { name, is_abstract: false })
                .collect(),
        })
    }

    #[inline]
    #[must_use]
    pub fn service(token: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            kind: Kind::Service,
            token: token.into(),
            metadata,
            operations: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn container(token: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            kind: Kind::Container,
            token: token.into(),
            metadata,
            operations: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "element={}, token={}", self.kind, self.token)
    }
}

/// Builder of an [`Element`], the only way to get one with arbitrary parts
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    pub(crate) kind: Option<Kind>,
    pub(crate) token: Option<String>,
    pub(crate) metadata: Option<Metadata>,
    pub(crate) operations: Vec<Operation>,
}

impl ElementBuilder {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kind: None,
            token: None,
            metadata: None,
            operations: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[inline]
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Declares an operation. Abstract operations make the element abstract.
    #[inline]
    #[must_use]
    pub fn operation(mut self, name: impl Into<String>, is_abstract: bool) -> Self {
        self.operations.push(Operation {
            name: name.into(),
            is_abstract,
        });
        self
    }

    /// # Errors
    /// Returns [`ElementErrorKind::MissingKind`], [`ElementErrorKind::MissingToken`] or
    /// [`ElementErrorKind::MissingMetadata`] for the first missing property, in this order
    pub fn build(self) -> Result<Element, ElementErrorKind> {
        let Some(kind) = self.kind else {
            let err = ElementErrorKind::MissingKind;
            error!("{}", err);
            return Err(err);
        };
        let Some(token) = self.token else {
            let err = ElementErrorKind::MissingToken;
            error!(%kind, "{}", err);
            return Err(err);
        };
        let Some(metadata) = self.metadata else {
            let err = ElementErrorKind::MissingMetadata;
            error!(%kind, token = %token, "{}", err);
            return Err(err);
        };

        Ok(Element {
            kind,
            token,
            metadata,
            operations: self.operations,
        })
    }
}

impl From<&Element> for ElementBuilder {
    fn from(element: &Element) -> Self {
        Self {
            kind: Some(element.kind),
            token: Some(element.token.clone()),
            metadata: Some(element.metadata.clone()),
            operations: element.operations.clone(),
        }
    }
}
