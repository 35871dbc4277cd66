//! The resolver engine.
//!
//! Every module the loader cannot run straight away becomes a
//! [`PendingModule`]. Each time a dependency is registered the [`Resolver`]
//! runs one resolution pass over a snapshot of
//! the pending ids: every pending module is re-partitioned into
//! available and missing names, and the ones with nothing missing are removed
//! and invoked.
//!
//! ```text
//!             register_dependency
//!                     ↓
//!   Pending ── all names available? ──yes──→ Resolved (callback runs once)
//!      ↑                 │
//!      └──────no─────────┘
//! ```
//!
//! There is no way back from Resolved, and no way out of Pending other than
//! resolution: modules whose dependencies never arrive stay pending for the
//! lifetime of the resolver.
//!
//! A callback may define further dependencies through the [`Definitions`]
//! handle it is given. The loader registers them after the callback returns
//! and runs a nested pass for each, so chains of modules that provide for one
//! another settle within a single registration.

pub mod definitions;
pub mod engine;
pub mod module;

pub use definitions::Definitions;
pub use engine::{PassReport, Resolver};
pub use module::{ArgumentOrder, Callback, ModuleId, Partition, PendingModule};
