// src/progress.rs
use crate::error::AuditError;

/// Stage reporting for the audit pipeline.
/// The CLI turns it into log lines; tests can record it.
pub trait Progress {
    /// Called once with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// A stage is about to run.
    fn stage(&mut self, _name: &str) {}

    /// The current stage failed; the run stops after this.
    fn failed(&mut self, _err: &AuditError) {}

    /// Called after the report is rendered. Not called when a stage fails.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards stages to the debug log.
pub struct LogProgress;
impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logd!("audit: {total} stages");
    }
    fn stage(&mut self, name: &str) {
        logf!("{name}");
    }
    fn failed(&mut self, err: &AuditError) {
        loge!("{err}");
    }
    fn finish(&mut self) {
        logd!("audit: done");
    }
}
