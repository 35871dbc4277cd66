//! # payload - dependency-gated module loading
//!
//! Independently loaded pieces of code register *modules* together with the
//! names of the values they need. The loader holds each module back until all
//! of those names are available, then runs it exactly once with the values
//! injected as arguments. Execution order falls out of the declared
//! dependencies; nothing has to be bundled or sorted ahead of time.
//!
//! ## Quick Start
//!
//! ```
//! use payload::loader::{Dependencies, Loader};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut loader: Loader<String> = Loader::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! // Explicit names
//! let sink = Rc::clone(&log);
//! loader
//!     .request_module(Dependencies::names(&["a", "b"]), move |args| {
//!         sink.borrow_mut().push(args.join("+"));
//!     })
//!     .unwrap();
//!
//! // Names read from the callback's declaration
//! let sink = Rc::clone(&log);
//! loader
//!     .request_module(Dependencies::inferred("function(b) {}"), move |args| {
//!         sink.borrow_mut().push(args.join("+"));
//!     })
//!     .unwrap();
//!
//! loader.register_dependency("b", "X".to_string()).unwrap();
//! assert_eq!(*log.borrow(), vec!["X"]);
//!
//! loader.register_dependency("a", "Y".to_string()).unwrap();
//! assert_eq!(*log.borrow(), vec!["X", "Y+X"]);
//! ```
//!
//! ## Where Values Come From
//!
//! ```text
//! Name Lookup Order:
//! 1. Registry            ← loader.register_dependency(name, value)
//! 2. Ambient namespaces  ← loader.add_namespace(...), queried in order
//! ```
//!
//! The registry is append-only: registering a name twice is reported through
//! the diagnostic channel and the first value stays. Ambient namespaces are
//! owned by someone else and only ever read; see [`ambient`].
//!
//! ## Architecture
//!
//! - **[`loader`]** - Public entry point (`request_module`, `request_module_with`, `register_dependency`)
//! - **[`registry`]** - Append-only store of registered values
//! - **[`ambient`]** - External namespaces and the combined lookup scope
//! - **[`inference`]** - Dependency names from callback declarations
//! - **[`resolver`]** - Pending set and resolution passes
//! - **[`diagnostics`]** - Sink for recoverable errors
//! - **[`config`]** - TOML configuration
//! - **[`script`]** - Line-oriented command language driving a loader

pub mod ambient;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod inference;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod script;

pub use error::{ConfigError, InferenceError, LoaderError, ScriptError};
pub use loader::{Dependencies, Loader, RequestOutcome};
pub use resolver::Definitions;
