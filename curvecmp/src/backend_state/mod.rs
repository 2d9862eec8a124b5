use app_core::backend::BackendState;

/// State of the thread that reads curve files.
#[derive(Debug, Default)]
pub struct BackendAppState {
    files_read: usize,
}

impl BackendState for BackendAppState {}

impl BackendAppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a file read, returns the running total.
    pub fn record_read(&mut self) -> usize {
        self.files_read += 1;
        self.files_read
    }
}
