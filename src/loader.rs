//! The public entry point: request modules, register dependencies.
//!
//! A [`Loader`] owns everything the engine needs: the registry of values, the
//! ambient environment, the pending set and the diagnostic sink. There is no
//! global instance; whoever bootstraps the system creates one and hands it
//! around, and every test can build its own.
//!
//! ```
//! use payload::loader::{Dependencies, Loader, RequestOutcome};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut loader: Loader<&str> = Loader::new();
//! let seen = Rc::new(RefCell::new(None));
//!
//! let sink = Rc::clone(&seen);
//! let outcome = loader
//!     .request_module(Dependencies::inferred("test => {}"), move |args| {
//!         *sink.borrow_mut() = Some(args[0]);
//!     })
//!     .unwrap();
//! assert!(matches!(outcome, RequestOutcome::Pending(_)));
//!
//! loader.register_dependency("test", "bar").unwrap();
//! assert_eq!(*seen.borrow(), Some("bar"));
//! ```

use tracing::debug;

use crate::ambient::{AmbientEnvironment, AmbientNamespace, Scope};
use crate::config::LoaderConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::LoaderError;
use crate::inference::infer_required_names;
use crate::registry::Registry;
use crate::resolver::{
    ArgumentOrder, Definitions, ModuleId, Partition, PassReport, PendingModule, Resolver,
};

/// Where a module's dependency names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependencies {
    /// Explicit names, in the order the callback expects its arguments.
    Names(Vec<String>),
    /// The callback's declaration text; names are read from its parameters.
    Inferred(String),
}

impl Dependencies {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dependencies::Names(names.into_iter().map(|s| s.as_ref().to_string()).collect())
    }

    pub fn inferred(declaration: impl Into<String>) -> Self {
        Dependencies::Inferred(declaration.into())
    }

    /// The ordered names this source stands for.
    pub fn required_names(&self) -> Result<Vec<String>, LoaderError> {
        match self {
            Dependencies::Names(names) => {
                if names.iter().any(|n| n.trim().is_empty()) {
                    return Err(LoaderError::invalid_argument(
                        "dependency names must not be empty",
                    ));
                }
                Ok(names.clone())
            }
            Dependencies::Inferred(declaration) => Ok(infer_required_names(declaration)?),
        }
    }
}

/// What `request_module` did with the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Everything was available; the callback already ran.
    Invoked,
    /// The module waits in the pending set.
    Pending(ModuleId),
}

/// Dependency-gated module loader.
pub struct Loader<V> {
    registry: Registry<V>,
    ambient: AmbientEnvironment<V>,
    resolver: Resolver<V>,
    diagnostics: Box<dyn Diagnostics>,
}

impl<V: Clone> Loader<V> {
    pub fn new() -> Self {
        Loader {
            registry: Registry::new(),
            ambient: AmbientEnvironment::new(),
            resolver: Resolver::new(ArgumentOrder::default()),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Loader honouring the settings of `config` that apply to every value
    /// type. Seeding `globals` is left to the caller, who picks the namespace.
    pub fn with_config(config: &LoaderConfig) -> Self {
        Self::new().with_argument_order(config.argument_order)
    }

    /// Set the argument order. Modules already pending stay pending and use
    /// the new order when they run.
    pub fn with_argument_order(mut self, order: ArgumentOrder) -> Self {
        self.resolver.set_argument_order(order);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Add an ambient namespace, consulted after the registry and after any
    /// namespace added before it.
    pub fn add_namespace(&mut self, namespace: Box<dyn AmbientNamespace<V>>) {
        debug!(namespace = namespace.name(), "ambient namespace added");
        self.ambient.add_namespace(namespace);
    }

    /// Run `callback` once every name in `dependencies` is available.
    ///
    /// If they already are, the callback runs before this returns, with
    /// values in declared order, and no pending module is created.
    pub fn request_module<F>(
        &mut self,
        dependencies: Dependencies,
        callback: F,
    ) -> Result<RequestOutcome, LoaderError>
    where
        F: FnOnce(Vec<V>) + 'static,
    {
        self.request_module_with(dependencies, move |args, _| callback(args))
    }

    /// Like [`request_module`](Loader::request_module), for callbacks that
    /// define dependencies of their own.
    ///
    /// Everything the callback defines is registered once it returns, each
    /// name followed by a resolution pass, so modules waiting on those names
    /// run before this call (or the registration that triggered it) returns.
    pub fn request_module_with<F>(
        &mut self,
        dependencies: Dependencies,
        callback: F,
    ) -> Result<RequestOutcome, LoaderError>
    where
        F: FnOnce(Vec<V>, &mut Definitions<V>) + 'static,
    {
        let required = dependencies
            .required_names()
            .map_err(|err| self.report(err))?;

        let scope = Scope::new(&self.registry, &self.ambient);
        let partition = Partition::of(&required, &scope);
        if partition.is_complete() {
            if let Some(args) = scope.resolve_all(&required) {
                debug!(required = ?required, "module ready on request");
                let mut definitions = Definitions::new();
                callback(args, &mut definitions);
                self.apply_definitions(definitions, &mut PassReport::default());
                return Ok(RequestOutcome::Invoked);
            }
        }

        let module = PendingModule::new(required, partition, Box::new(callback));
        debug!(
            module = %module.id(),
            missing = ?module.unresolved_names(),
            "module pending"
        );
        Ok(RequestOutcome::Pending(self.resolver.insert(module)))
    }

    /// Register `value` under `name`, then run one resolution pass.
    ///
    /// The report lists every module invoked as a consequence, including
    /// those released by definitions made inside callbacks.
    pub fn register_dependency(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) -> Result<PassReport, LoaderError> {
        let name = name.into();
        if let Err(err) = self.registry.insert(name.clone(), value) {
            return Err(self.report(err));
        }
        debug!(dependency = %name, pending = self.resolver.len(), "dependency registered");
        Ok(self.evaluate_all())
    }

    /// Run a resolution pass without registering anything.
    ///
    /// Useful after an ambient namespace gained bindings on its own.
    pub fn refresh(&mut self) -> PassReport {
        self.evaluate_all()
    }

    /// Is `name` available from the registry or any ambient namespace?
    pub fn is_available(&self, name: &str) -> bool {
        Scope::new(&self.registry, &self.ambient).is_available(name)
    }

    pub fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    pub fn argument_order(&self) -> ArgumentOrder {
        self.resolver.argument_order()
    }

    pub fn pending_count(&self) -> usize {
        self.resolver.len()
    }

    /// Pending modules in the order they were requested.
    pub fn pending(&self) -> impl Iterator<Item = &PendingModule<V>> {
        self.resolver.iter()
    }

    pub fn is_pending(&self, id: ModuleId) -> bool {
        self.resolver.contains(id)
    }

    /// Every name some pending module is still waiting for.
    pub fn missing_names(&self) -> Vec<String> {
        self.resolver.missing_names()
    }

    fn evaluate_all(&mut self) -> PassReport {
        let mut report = PassReport::default();
        self.run_pass(&mut report);
        debug!(
            invoked = report.invoked_count(),
            pending = self.resolver.len(),
            "resolution pass finished"
        );
        report
    }

    /// Evaluate a snapshot of the pending set, registering what each invoked
    /// callback defined before moving on to the next module.
    fn run_pass(&mut self, report: &mut PassReport) {
        for id in self.resolver.snapshot() {
            let mut definitions = Definitions::new();
            let scope = Scope::new(&self.registry, &self.ambient);
            if self.resolver.evaluate(id, &scope, &mut definitions) {
                report.invoked.push(id);
                self.apply_definitions(definitions, report);
            }
        }
    }

    /// Register definitions made by a callback, one nested pass per name.
    /// Failures go to the diagnostic sink only; the callback has returned.
    fn apply_definitions(&mut self, definitions: Definitions<V>, report: &mut PassReport) {
        for (name, value) in definitions.into_entries() {
            match self.registry.insert(name.clone(), value) {
                Ok(()) => {
                    debug!(dependency = %name, "dependency defined by module");
                    self.run_pass(report);
                }
                Err(err) => self.diagnostics.report(&err),
            }
        }
    }

    fn report(&self, err: LoaderError) -> LoaderError {
        self.diagnostics.report(&err);
        err
    }
}

impl<V: Clone> Default for Loader<V> {
    fn default() -> Self {
        Self::new()
    }
}
