//! Name inference from callback declarations.
//!
//! Lets a module be requested with just its callback,
//! `function(jquery, router) { ... }`, instead of spelling the dependency list
//! out next to it. The parameter names are read from the declaration text by
//! a small PEG grammar. Only plain parameter lists are understood; anything
//! fancier must go through an explicit name list.

mod api;
#[cfg(test)]
mod unit_tests;

pub use api::infer_required_names;
