//! Application state for the API server

use std::sync::Arc;

use receipt_points::store::MemoryStore;
use receipt_points::Processor;

/// API server state
///
/// Constructed once at startup and shared by every handler. The store it
/// wraps is dropped with the process; nothing is persisted.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<Processor<MemoryStore>>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create state over a fresh, empty in-memory store.
    pub fn new() -> Self {
        Self {
            processor: Arc::new(Processor::new(MemoryStore::new())),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
