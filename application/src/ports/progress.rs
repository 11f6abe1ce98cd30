//! Progress notification port
//!
//! Lets the presentation layer show activity while a completion is in flight.

/// Callback for progress updates during a turn
pub trait TurnProgressNotifier: Send + Sync {
    /// Called right before the completion request is sent
    fn on_completion_start(&self);

    /// Called when the completion request finished (successfully or not)
    fn on_completion_end(&self);

    /// Called before a tool is invoked
    fn on_tool_start(&self, _tool_name: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {
    fn on_completion_start(&self) {}
    fn on_completion_end(&self) {}
}
