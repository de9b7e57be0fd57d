use std::sync::Arc;

use dds::DoubleDummySolver;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Handle to the double-dummy engine, shared by all workers
    pub solver: Arc<dyn DoubleDummySolver>,
}

impl AppState {
    /// Create a new AppState wrapping the given solver handle
    pub fn new(solver: Arc<dyn DoubleDummySolver>) -> Self {
        Self { solver }
    }
}
