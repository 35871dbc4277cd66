//! Dependencies a module defines while its callback runs.

/// Handle given to a running callback for defining further dependencies.
///
/// The loader is busy while a callback runs, so definitions are queued here
/// and registered once the callback returns, each followed by its own
/// resolution pass. Queued order is registration order.
pub struct Definitions<V> {
    queued: Vec<(String, V)>,
}

impl<V> Definitions<V> {
    pub fn new() -> Self {
        Definitions { queued: Vec::new() }
    }

    /// Queue `value` for registration under `name`.
    pub fn define(&mut self, name: impl Into<String>, value: V) {
        self.queued.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.queued
    }
}

impl<V> Default for Definitions<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_keep_queue_order() {
        let mut definitions = Definitions::new();
        assert!(definitions.is_empty());
        definitions.define("plugin", 1);
        definitions.define("widget", 2);
        definitions.define("plugin", 3);
        assert_eq!(definitions.len(), 3);

        let entries = definitions.into_entries();
        assert_eq!(
            entries,
            vec![
                ("plugin".to_string(), 1),
                ("widget".to_string(), 2),
                ("plugin".to_string(), 3)
            ]
        );
    }
}
