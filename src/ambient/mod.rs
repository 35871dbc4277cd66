//! Ambient namespaces: dependency values the loader does not own.
//!
//! Besides its own [`Registry`](crate::registry::Registry), a loader can look
//! names up in any number of external, read-only namespaces. These play the
//! role a browser's `window` object plays for scripts: values made available
//! by code outside the loader's control.
//!
//! ```text
//! Name Lookup Order:
//! 1. Registry            ← values registered through the loader
//! 2. Ambient namespaces  ← queried in the order they were added
//! ```
//!
//! ### Key Components
//!
//! - **[`AmbientNamespace`]**: Trait for anything that can answer "is this name bound?"
//! - **[`AmbientEnvironment`]**: Ordered chain of namespaces; the first that claims a name wins
//! - **[`Scope`]**: Combined registry + ambient view used during resolution
//! - **[`SharedNamespace`]**: Cloneable in-memory namespace the embedder can mutate
//! - **[`ProcessEnv`]**: Process environment variables as a namespace
//!
//! Nothing is cached. A binding can appear or disappear between two resolution
//! passes without any registry activity, so every lookup goes to the
//! namespace itself.
//!
//! ## Example
//!
//! ```
//! use payload::ambient::SharedNamespace;
//! use payload::loader::{Dependencies, Loader};
//!
//! let window = SharedNamespace::new("window");
//! window.bind("$", "jquery".to_string());
//!
//! let mut loader: Loader<String> = Loader::new();
//! loader.add_namespace(Box::new(window.clone()));
//!
//! loader
//!     .request_module(Dependencies::names(&["$"]), |args| assert_eq!(args[0], "jquery"))
//!     .unwrap();
//! ```

pub mod environment;
pub mod namespace;
pub mod process_env;
pub mod scope;
pub mod shared;

pub use environment::AmbientEnvironment;
pub use namespace::AmbientNamespace;
pub use process_env::ProcessEnv;
pub use scope::Scope;
pub use shared::SharedNamespace;
