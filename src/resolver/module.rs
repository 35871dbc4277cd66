//! Pending modules and their availability partition.

use std::fmt;

use serde::Deserialize;
use uuid::Uuid;

use crate::ambient::Scope;

use super::definitions::Definitions;

/// Callback invoked once a module's dependencies are all available.
pub type Callback<V> = Box<dyn FnOnce(Vec<V>, &mut Definitions<V>)>;

/// Identifies a module for its whole pending lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(Uuid);

impl ModuleId {
    pub fn new() -> Self {
        ModuleId(Uuid::new_v4())
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hyphenated())
    }
}

/// Order in which a module that waited receives its arguments.
///
/// Modules that run on request always receive values in declared order. The
/// two variants only differ for modules that were held pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentOrder {
    /// Values follow the order the names were declared in.
    Declared,
    /// Values follow the working order of the last pass: names that were
    /// already available first, then the ones that just arrived.
    Legacy,
}

impl Default for ArgumentOrder {
    fn default() -> Self {
        ArgumentOrder::Declared
    }
}

/// A module's names split by current availability.
///
/// Both halves keep the relative order of the sequence they were built from,
/// and duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub resolved: Vec<String>,
    pub unresolved: Vec<String>,
}

impl Partition {
    pub fn of<'n, V, I>(names: I, scope: &Scope<'_, V>) -> Self
    where
        V: Clone,
        I: IntoIterator<Item = &'n String>,
    {
        let mut partition = Partition::default();
        for name in names {
            if scope.is_available(name) {
                partition.resolved.push(name.clone());
            } else {
                partition.unresolved.push(name.clone());
            }
        }
        partition
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// A module waiting for at least one dependency.
pub struct PendingModule<V> {
    id: ModuleId,
    required: Vec<String>,
    partition: Partition,
    callback: Callback<V>,
}

impl<V> PendingModule<V> {
    pub fn new(required: Vec<String>, partition: Partition, callback: Callback<V>) -> Self {
        PendingModule {
            id: ModuleId::new(),
            required,
            partition,
            callback,
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// Names as declared when the module was requested.
    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    pub fn resolved_names(&self) -> &[String] {
        &self.partition.resolved
    }

    pub fn unresolved_names(&self) -> &[String] {
        &self.partition.unresolved
    }

    /// Previous resolved names followed by previous unresolved names.
    pub(crate) fn working_names(&self) -> Vec<String> {
        self.partition
            .resolved
            .iter()
            .chain(self.partition.unresolved.iter())
            .cloned()
            .collect()
    }

    pub(crate) fn set_partition(&mut self, partition: Partition) {
        self.partition = partition;
    }

    pub(crate) fn into_callback(self) -> Callback<V> {
        self.callback
    }
}
