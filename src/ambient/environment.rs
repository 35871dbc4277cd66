//! Ordered chain of ambient namespaces.

use tracing::trace;

use super::namespace::AmbientNamespace;

/// The ambient environment consulted after the registry.
///
/// Holds any number of [`AmbientNamespace`]s, queried in registration order.
/// Unlike the registry it never stores values itself: every lookup is
/// forwarded to the namespaces, so changes made by their owners are seen on
/// the next lookup.
pub struct AmbientEnvironment<V> {
    namespaces: Vec<Box<dyn AmbientNamespace<V>>>,
}

impl<V> AmbientEnvironment<V> {
    pub fn new() -> Self {
        AmbientEnvironment {
            namespaces: Vec::new(),
        }
    }

    /// Add a namespace. Namespaces are queried in the order they were added.
    pub fn add_namespace(&mut self, namespace: Box<dyn AmbientNamespace<V>>) {
        self.namespaces.push(namespace);
    }

    /// Find which namespace (if any) binds the given name.
    fn find_namespace_index(&self, name: &str) -> Option<usize> {
        self.namespaces.iter().position(|ns| ns.has_binding(name))
    }

    /// Check if any namespace binds the given name.
    pub fn has_name(&self, name: &str) -> bool {
        self.find_namespace_index(name).is_some()
    }

    /// Read the value bound to `name` by the first namespace that claims it.
    pub fn resolve_binding(&self, name: &str) -> Option<V> {
        let namespace = &self.namespaces[self.find_namespace_index(name)?];
        trace!(dependency = name, namespace = namespace.name(), "resolved ambient binding");
        namespace.resolve(name)
    }

    /// Get a reference to the namespaces (for inspection/testing).
    pub fn namespaces(&self) -> &[Box<dyn AmbientNamespace<V>>] {
        &self.namespaces
    }
}

impl<V> Default for AmbientEnvironment<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::SharedNamespace;

    #[test]
    fn test_first_namespace_wins() {
        let first = SharedNamespace::new("first");
        let second = SharedNamespace::new("second");
        first.bind("x", 1);
        second.bind("x", 2);
        second.bind("y", 3);

        let mut env = AmbientEnvironment::new();
        env.add_namespace(Box::new(first));
        env.add_namespace(Box::new(second));

        assert_eq!(env.resolve_binding("x"), Some(1));
        assert_eq!(env.resolve_binding("y"), Some(3));
        assert_eq!(env.resolve_binding("z"), None);
        assert_eq!(env.namespaces().len(), 2);
    }

    #[test]
    fn test_lookups_are_live() {
        let window = SharedNamespace::new("window");
        let mut env = AmbientEnvironment::new();
        env.add_namespace(Box::new(window.clone()));

        assert!(!env.has_name("late"));
        window.bind("late", "here");
        assert!(env.has_name("late"));
        window.unbind("late");
        assert!(!env.has_name("late"));
    }
}
