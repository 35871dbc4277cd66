//! Diagnostic channel for recoverable loader errors.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::error;

use crate::error::LoaderError;

/// Write-only sink for errors the loader recovers from.
///
/// The loader never reads anything back and never stops because of a report.
pub trait Diagnostics {
    fn report(&self, error: &LoaderError);
}

/// Default sink: logs every report at `error` level through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, err: &LoaderError) {
        error!(error = %err, "recoverable loader error");
    }
}

/// Keeps every report in memory. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingDiagnostics {
    reports: Rc<RefCell<Vec<LoaderError>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<LoaderError> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, err: &LoaderError) {
        self.reports.borrow_mut().push(err.clone());
    }
}
