//! Registry of dependency values.
//!
//! The registry is append-only: a name, once registered, keeps its first value
//! for the lifetime of the registry. Entries keep their insertion order so
//! they can be listed the way they arrived.

use indexmap::IndexMap;

use crate::error::LoaderError;

/// Append-only store of registered dependency values.
pub struct Registry<V> {
    entries: IndexMap<String, V>,
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Registry {
            entries: IndexMap::new(),
        }
    }

    /// Register `value` under `name`.
    ///
    /// Fails with [`LoaderError::DuplicateRegistration`] if the name is
    /// already present; the existing value is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Result<(), LoaderError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LoaderError::invalid_argument(
                "dependency names must not be empty",
            ));
        }
        if self.entries.contains_key(&name) {
            return Err(LoaderError::duplicate(name));
        }
        self.entries.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Registered entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}
