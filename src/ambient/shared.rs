//! In-memory namespace shared between the loader and its embedder.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::namespace::AmbientNamespace;

/// A cloneable handle to a mutable set of ambient bindings.
///
/// The loader only ever reads through its handle; the embedder keeps another
/// clone and binds or unbinds names as outside code becomes available.
pub struct SharedNamespace<V> {
    label: String,
    bindings: Rc<RefCell<IndexMap<String, V>>>,
}

impl<V> SharedNamespace<V> {
    pub fn new(label: impl Into<String>) -> Self {
        SharedNamespace {
            label: label.into(),
            bindings: Rc::new(RefCell::new(IndexMap::new())),
        }
    }

    /// Bind `name`, returning the value it replaces.
    pub fn bind(&self, name: impl Into<String>, value: V) -> Option<V> {
        self.bindings.borrow_mut().insert(name.into(), value)
    }

    pub fn unbind(&self, name: &str) -> Option<V> {
        self.bindings.borrow_mut().shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }
}

impl<V> Clone for SharedNamespace<V> {
    fn clone(&self) -> Self {
        SharedNamespace {
            label: self.label.clone(),
            bindings: Rc::clone(&self.bindings),
        }
    }
}

impl<V: Clone> AmbientNamespace<V> for SharedNamespace<V> {
    fn has_binding(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn resolve(&self, name: &str) -> Option<V> {
        self.bindings.borrow().get(name).cloned()
    }

    fn name(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_bindings() {
        let window = SharedNamespace::new("window");
        let handle = window.clone();
        window.bind("$", true);
        assert!(handle.has_binding("$"));
        assert_eq!(handle.resolve("$"), Some(true));
        assert_eq!(handle.name(), "window");
    }

    #[test]
    fn test_bind_replaces_and_unbind_removes() {
        let ns = SharedNamespace::new("ns");
        assert_eq!(ns.bind("a", 1), None);
        assert_eq!(ns.bind("a", 2), Some(1));
        assert_eq!(ns.unbind("a"), Some(2));
        assert!(ns.is_empty());
    }
}
