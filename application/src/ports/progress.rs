//! Progress notification port
//!
//! The interpretation request blocks until the backend answers; this lets
//! the presentation layer show that something is happening.

/// Callback for progress updates during the interpretation request
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, model: &str);

    /// Called when the request finished, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &str) {}
    fn on_request_complete(&self, _success: bool) {}
}
