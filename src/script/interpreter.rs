//! Executes script commands against a `Loader<String>`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::ambient::{AmbientNamespace, SharedNamespace};
use crate::config::LoaderConfig;
use crate::error::ScriptError;
use crate::loader::{Loader, RequestOutcome};
use crate::resolver::ModuleId;

use super::parser::{parse_line, Command};

/// Script interpreter. Each command returns the lines it printed.
pub struct Interpreter {
    loader: Loader<String>,
    globals: SharedNamespace<String>,
    /// Lines written by module callbacks, drained after every command.
    output: Rc<RefCell<Vec<String>>>,
    labels: HashMap<ModuleId, String>,
    modules_requested: usize,
}

impl Interpreter {
    pub fn new(config: &LoaderConfig) -> Self {
        let globals = SharedNamespace::new("globals");
        for (name, value) in &config.globals {
            globals.bind(name.clone(), value.clone());
        }
        let mut loader = Loader::with_config(config);
        loader.add_namespace(Box::new(globals.clone()));

        Interpreter {
            loader,
            globals,
            output: Rc::new(RefCell::new(vec![])),
            labels: HashMap::new(),
            modules_requested: 0,
        }
    }

    /// Add another ambient namespace after the script's own globals.
    pub fn add_namespace(&mut self, namespace: Box<dyn AmbientNamespace<String>>) {
        self.loader.add_namespace(namespace);
    }

    pub fn loader(&self) -> &Loader<String> {
        &self.loader
    }

    /// Run every line of `source`, stopping at the first line that does not parse.
    pub fn run_source(&mut self, source: &str) -> Result<Vec<String>, ScriptError> {
        let mut printed = vec![];
        for (idx, text) in source.lines().enumerate() {
            printed.extend(self.run_line(text, idx + 1)?);
        }
        Ok(printed)
    }

    pub fn run_line(&mut self, text: &str, line: usize) -> Result<Vec<String>, ScriptError> {
        Ok(match parse_line(text, line)? {
            Some(command) => self.execute(command),
            None => vec![],
        })
    }

    pub fn execute(&mut self, command: Command) -> Vec<String> {
        debug!(?command, "executing script command");
        let mut printed = vec![];
        match command {
            Command::Global { name, value } => {
                self.globals.bind(name, value);
            }
            Command::Define { name, value } => {
                if let Err(err) = self.loader.register_dependency(name, value) {
                    printed.push(format!("error: {}", err));
                }
            }
            Command::Require {
                label,
                dependencies,
            } => {
                self.modules_requested += 1;
                let label = label.unwrap_or_else(|| format!("module{}", self.modules_requested));
                let output = Rc::clone(&self.output);
                let callback_label = label.clone();
                let outcome = self.loader.request_module(dependencies, move |args| {
                    output
                        .borrow_mut()
                        .push(format!("{}({})", callback_label, args.join(", ")));
                });
                match outcome {
                    Ok(RequestOutcome::Invoked) => {}
                    Ok(RequestOutcome::Pending(id)) => {
                        if let Some(module) = self.loader.pending().find(|m| m.id() == id) {
                            printed.push(format!(
                                "{} waiting for {}",
                                label,
                                module.unresolved_names().join(", ")
                            ));
                        }
                        self.labels.insert(id, label);
                    }
                    Err(err) => printed.push(format!("error: {}", err)),
                }
            }
            Command::Pending => {
                for module in self.loader.pending() {
                    let label = self
                        .labels
                        .get(&module.id())
                        .cloned()
                        .unwrap_or_else(|| module.id().to_string());
                    printed.push(format!(
                        "{} waiting for {}",
                        label,
                        module.unresolved_names().join(", ")
                    ));
                }
                if printed.is_empty() {
                    printed.push("no pending modules".to_string());
                }
            }
            Command::Registry => {
                for (name, value) in self.loader.registry().iter() {
                    printed.push(format!("{} = {}", name, value));
                }
            }
        }

        let loader = &self.loader;
        self.labels.retain(|id, _| loader.is_pending(*id));

        let mut lines: Vec<String> = self.output.borrow_mut().drain(..).collect();
        lines.extend(printed);
        lines
    }
}
