//! Resolution passes over the pending set.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ambient::Scope;

use super::definitions::Definitions;
use super::module::{ArgumentOrder, ModuleId, Partition, PendingModule};

/// Modules invoked by one resolution pass, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub invoked: Vec<ModuleId>,
}

impl PassReport {
    pub fn invoked_count(&self) -> usize {
        self.invoked.len()
    }
}

/// Owns the pending set and runs resolution passes over it.
pub struct Resolver<V> {
    /// Modules not yet invoked, in the order they were requested.
    pending: IndexMap<ModuleId, PendingModule<V>>,
    order: ArgumentOrder,
}

impl<V: Clone> Resolver<V> {
    pub fn new(order: ArgumentOrder) -> Self {
        Resolver {
            pending: IndexMap::new(),
            order,
        }
    }

    pub fn argument_order(&self) -> ArgumentOrder {
        self.order
    }

    pub fn insert(&mut self, module: PendingModule<V>) -> ModuleId {
        let id = module.id();
        self.pending.insert(id, module);
        id
    }

    /// Change the argument order. Pending modules are kept and use the new
    /// order from their next evaluation on.
    pub fn set_argument_order(&mut self, order: ArgumentOrder) {
        self.order = order;
    }

    /// Ids of the pending modules at this moment, in request order.
    ///
    /// A pass iterates this snapshot, so modules removed while the pass runs
    /// never disturb the iteration.
    pub fn snapshot(&self) -> Vec<ModuleId> {
        self.pending.keys().copied().collect()
    }

    /// Re-partition one module and invoke it if nothing is missing.
    ///
    /// Returns `true` if the module was invoked and left the pending set.
    /// Whatever the callback defined is left in `definitions`.
    pub fn evaluate(
        &mut self,
        id: ModuleId,
        scope: &Scope<'_, V>,
        definitions: &mut Definitions<V>,
    ) -> bool {
        let module = match self.pending.get_mut(&id) {
            Some(module) => module,
            None => return false,
        };

        let working = module.working_names();
        let partition = Partition::of(&working, scope);
        trace!(
            module = %id,
            resolved = ?partition.resolved,
            unresolved = ?partition.unresolved,
            "evaluated pending module"
        );
        if !partition.is_complete() {
            module.set_partition(partition);
            return false;
        }

        let args = match self.order {
            ArgumentOrder::Declared => scope.resolve_all(module.required_names()),
            ArgumentOrder::Legacy => scope.resolve_all(&working),
        };
        module.set_partition(partition);
        let args = match args {
            Some(args) => args,
            None => return false,
        };

        match self.pending.shift_remove(&id) {
            Some(module) => {
                debug!(module = %id, "invoking module");
                (module.into_callback())(args, definitions);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn get(&self, id: ModuleId) -> Option<&PendingModule<V>> {
        self.pending.get(&id)
    }

    /// Pending modules in the order they were requested.
    pub fn iter(&self) -> impl Iterator<Item = &PendingModule<V>> {
        self.pending.values()
    }

    /// Every name some pending module is still missing, first-seen order.
    pub fn missing_names(&self) -> Vec<String> {
        let mut missing: Vec<String> = vec![];
        for name in self.pending.values().flat_map(|m| m.unresolved_names()) {
            if !missing.contains(name) {
                missing.push(name.clone());
            }
        }
        missing
    }
}
