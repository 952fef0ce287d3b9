//! Connected flag as a watch channel

use tokio::sync::watch;

/// Handle to the external connected flag
///
/// Starts disconnected. The provider side flips the flag; any number of view
/// loops can subscribe and observe transitions.
#[derive(Debug)]
pub struct ConnectionSignal {
    tx: watch::Sender<bool>,
}

impl ConnectionSignal {
    /// Create a new signal in the disconnected state
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Flip the connected flag
    ///
    /// The value is stored even when no subscriber is live, so a receiver
    /// created later starts from the current flag.
    pub fn set_connected(&self, connected: bool) {
        self.tx.send_replace(connected);
    }

    /// Current value of the flag
    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to flag changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for ConnectionSignal {
    fn default() -> Self {
        Self::new()
    }
}
