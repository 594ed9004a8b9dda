//! Programmatic stop for an embedded server.
//!
//! OS signals stop the binary; code that runs `HttpServer` in-process
//! (integration tests, embedding applications) stops it through this handle.

use tokio::sync::broadcast;

/// Handle that tells every running `HttpServer::run` subscribed to it to drain and return.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask subscribed servers to stop. A no-op when none are running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
