use alloc::{string::String, sync::Arc};
use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

/// Shared, type-erased instance stored in a resolution
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Static capability tag of a provided type.
///
/// A component satisfies a dependency request if it provides exactly the requested type,
/// so two [`TypeInfo`] are equal when their [`TypeId`] are.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type name with every module path stripped, generics included.
    /// `alloc::boxed::Box<dyn app::ports::Adder>` becomes `Box<dyn Adder>`.
    #[must_use]
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        for ch in self.name.chars() {
            short.push(ch);
            if short.ends_with("::") {
                short.truncate(short.len() - 2);
                while short.ends_with(|ch: char| ch.is_alphanumeric() || ch == '_') {
                    short.pop();
                }
            }
        }
        short
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
