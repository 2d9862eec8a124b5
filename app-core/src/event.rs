/// Outcome of applying an [`AppEvent`] once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    /// The event is done and can be dropped.
    Finished,
    /// The event waits for something (a dialog, a backend reply) and has to
    /// be applied again in the next frame.
    Busy,
}

/// An event that mutates the application state on the UI thread.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;
}
