//! Process environment variables as an ambient namespace.

use std::env;

use super::namespace::AmbientNamespace;

/// Exposes environment variables of the running process.
///
/// With a prefix, the dependency name `db_url` is looked up as
/// `<prefix>db_url`. Variables that are not valid unicode are treated as
/// unbound.
pub struct ProcessEnv {
    prefix: String,
}

impl ProcessEnv {
    pub fn new() -> Self {
        ProcessEnv {
            prefix: String::new(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        ProcessEnv {
            prefix: prefix.into(),
        }
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl Default for ProcessEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientNamespace<String> for ProcessEnv {
    fn has_binding(&self, name: &str) -> bool {
        !name.is_empty()
            && !name.contains(|c: char| c == '=' || c == '\0')
            && env::var(self.key(name)).is_ok()
    }

    fn resolve(&self, name: &str) -> Option<String> {
        if !self.has_binding(name) {
            return None;
        }
        env::var(self.key(name)).ok()
    }

    fn name(&self) -> &str {
        "process_env"
    }
}
