use alloc::vec::Vec;

use crate::{component::Component, module::Module, resolution::Role};

/// Role given to the exports of an imported container when they're merged into the importer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportPolicy {
    /// Imported exports always become providers of the importer, `re_export` doesn't change the role
    #[default]
    Demote,
    /// Imported exports stay exports when `re_export` is set, otherwise they become providers
    FollowReExport,
}

impl ImportPolicy {
    #[inline]
    #[must_use]
    pub const fn role(self, re_export: bool) -> Role {
        match self {
            ImportPolicy::FollowReExport if re_export => Role::Export,
            ImportPolicy::Demote | ImportPolicy::FollowReExport => Role::Provider,
        }
    }
}

/// Config of a container
/// ## Fields
/// - `providers`:
///   Components built by the container and kept private.
/// - `exports`:
///   Components built by the container and exposed to importers.
/// - `imports`:
///   Containers whose exports are merged into this one before its own components are resolved.
/// - `re_export`:
///   If `true`, exports found in another cached container keep the export role.
///   Whether imported exports keep it too is decided by `import_policy`.
#[derive(Clone, Default)]
pub struct Config {
    pub(crate) providers: Vec<Component>,
    pub(crate) exports: Vec<Component>,
    pub(crate) imports: Vec<Module>,
    pub(crate) re_export: bool,
    pub(crate) import_policy: ImportPolicy,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            providers: Vec::new(),
            exports: Vec::new(),
            imports: Vec::new(),
            re_export: false,
            import_policy: ImportPolicy::Demote,
        }
    }

    #[inline]
    #[must_use]
    pub fn provide(mut self, component: Component) -> Self {
        self.providers.push(component);
        self
    }

    #[inline]
    #[must_use]
    pub fn providers(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.providers.extend(components);
        self
    }

    #[inline]
    #[must_use]
    pub fn export(mut self, component: Component) -> Self {
        self.exports.push(component);
        self
    }

    #[inline]
    #[must_use]
    pub fn exports(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.exports.extend(components);
        self
    }

    #[inline]
    #[must_use]
    pub fn import(mut self, module: Module) -> Self {
        self.imports.push(module);
        self
    }

    #[inline]
    #[must_use]
    pub fn imports(mut self, modules: impl IntoIterator<Item = Module>) -> Self {
        self.imports.extend(modules);
        self
    }

    #[inline]
    #[must_use]
    pub fn re_export(mut self, re_export: bool) -> Self {
        self.re_export = re_export;
        self
    }

    #[inline]
    #[must_use]
    pub fn import_policy(mut self, import_policy: ImportPolicy) -> Self {
        self.import_policy = import_policy;
        self
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn get_providers(&self) -> &[Component] {
        &self.providers
    }

    #[inline]
    #[must_use]
    pub fn get_exports(&self) -> &[Component] {
        &self.exports
    }

    #[inline]
    #[must_use]
    pub fn get_imports(&self) -> &[Module] {
        &self.imports
    }

    #[inline]
    #[must_use]
    pub const fn is_re_export(&self) -> bool {
        self.re_export
    }

    #[inline]
    #[must_use]
    pub const fn get_import_policy(&self) -> ImportPolicy {
        self.import_policy
    }

    /// Providers followed by exports, the order of resolution
    #[inline]
    pub(crate) fn components(&self) -> impl Iterator<Item = &Component> {
        self.providers.iter().chain(self.exports.iter())
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_provider(&self, component: &Component) -> bool {
        self.providers.contains(component)
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_export(&self, component: &Component) -> bool {
        self.exports.contains(component)
    }
}

#[cfg(test)]
mod tests {
    use super::ImportPolicy;
    use crate::resolution::Role;

    #[test]
    fn test_import_policy_role() {
        assert_eq!(ImportPolicy::Demote.role(false), Role::Provider);
        assert_eq!(ImportPolicy::Demote.role(true), Role::Provider);
        assert_eq!(ImportPolicy::FollowReExport.role(false), Role::Provider);
        assert_eq!(ImportPolicy::FollowReExport.role(true), Role::Export);
        assert_eq!(ImportPolicy::default(), ImportPolicy::Demote);
    }
}
