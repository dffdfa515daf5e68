//! The shared infrastructure capability.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use crate::implements;

/// Persistent storage every fixture service talks to.
pub trait DataStore: Send + Sync {
    fn connect(&self);

    /// Number of `connect` calls made on this instance.
    fn connection_count(&self) -> usize;
}

/// In-memory stand-in that records its connections.
#[derive(Debug, Default)]
pub struct Database {
    connections: AtomicUsize,
}

impl DataStore for Database {
    fn connect(&self) {
        let n = self.connections.fetch_add(1, Ordering::SeqCst) + 1;
        info!(connections = n, "connected to database");
    }

    fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

implements!(Database => dyn DataStore);
