//! Namespace trait for externally owned dependency values.

/// A read-only source of named values outside the loader's registry.
///
/// Namespaces are queried in the order they were added to an
/// [`AmbientEnvironment`](super::AmbientEnvironment). The first namespace that
/// claims a name wins.
pub trait AmbientNamespace<V> {
    /// Is `name` currently bound in this namespace?
    ///
    /// This is called on every resolution pass for every missing name, so it
    /// should be a cheap check.
    fn has_binding(&self, name: &str) -> bool;

    /// Read the value currently bound to `name`.
    ///
    /// Returns `None` if the binding vanished since `has_binding` was asked.
    fn resolve(&self, name: &str) -> Option<V>;

    /// Human-readable name for this namespace (for debugging/logging).
    fn name(&self) -> &str;
}
