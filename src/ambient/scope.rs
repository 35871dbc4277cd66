//! Combined registry + ambient lookup used during resolution.

use crate::registry::Registry;

use super::environment::AmbientEnvironment;

/// A borrowed view over the registry and the ambient environment.
///
/// The registry always shadows ambient bindings of the same name. A scope
/// holds no state of its own; every call reads the live state underneath.
pub struct Scope<'a, V> {
    registry: &'a Registry<V>,
    ambient: &'a AmbientEnvironment<V>,
}

impl<'a, V: Clone> Scope<'a, V> {
    pub fn new(registry: &'a Registry<V>, ambient: &'a AmbientEnvironment<V>) -> Self {
        Scope { registry, ambient }
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.registry.contains(name) || self.ambient.has_name(name)
    }

    /// Registry value if present, else the ambient binding.
    ///
    /// Only meaningful for names `is_available` just reported; returns `None`
    /// otherwise.
    pub fn resolve_value(&self, name: &str) -> Option<V> {
        match self.registry.get(name) {
            Some(value) => Some(value.clone()),
            None => self.ambient.resolve_binding(name),
        }
    }

    /// Resolve every name in order, or `None` if any of them is unavailable.
    pub fn resolve_all<'n, I>(&self, names: I) -> Option<Vec<V>>
    where
        I: IntoIterator<Item = &'n String>,
    {
        names
            .into_iter()
            .map(|name| self.resolve_value(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::SharedNamespace;

    #[test]
    fn test_registry_shadows_ambient() {
        let mut registry = Registry::new();
        registry.insert("dup", "registered").unwrap();

        let window = SharedNamespace::new("window");
        window.bind("dup", "ambient");
        window.bind("only_ambient", "ambient");

        let mut ambient = AmbientEnvironment::new();
        ambient.add_namespace(Box::new(window));

        let scope = Scope::new(&registry, &ambient);
        assert_eq!(scope.resolve_value("dup"), Some("registered"));
        assert_eq!(scope.resolve_value("only_ambient"), Some("ambient"));
        assert!(!scope.is_available("missing"));
        assert_eq!(scope.resolve_value("missing"), None);
    }

    #[test]
    fn test_resolve_all_fails_on_any_missing() {
        let mut registry = Registry::new();
        registry.insert("a", 1).unwrap();
        let ambient = AmbientEnvironment::new();
        let scope = Scope::new(&registry, &ambient);

        let names = vec!["a".to_string(), "a".to_string()];
        assert_eq!(scope.resolve_all(&names), Some(vec![1, 1]));
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(scope.resolve_all(&names), None);
    }
}
