//! A line-oriented command language for driving a loader by hand.
//!
//! Every value in a script is a string. One command per line:
//!
//! ```text
//! global NAME = VALUE          bind NAME in the script's ambient namespace
//! define NAME = VALUE          register a dependency
//! require [LABEL:] a, b        request a module with explicit names
//! require [LABEL:] (a, b) => 0 request a module, names read from the declaration
//! pending                      list modules still waiting
//! registry                     list registered dependencies in order
//! ```
//!
//! `#` starts a comment. VALUE is a bare word or a double-quoted string. When
//! a module runs, the interpreter prints `LABEL(value, ...)`.
//!
//! ```
//! use payload::config::LoaderConfig;
//! use payload::script::Interpreter;
//!
//! let mut interpreter = Interpreter::new(&LoaderConfig::default());
//! let printed = interpreter
//!     .run_source("require app: a, b\ndefine b = X\ndefine a = Y")
//!     .unwrap();
//! assert_eq!(printed, vec!["app waiting for a, b", "app(Y, X)"]);
//! ```

mod interpreter;
mod parser;

pub use interpreter::Interpreter;
pub use parser::{parse_line, Command};
