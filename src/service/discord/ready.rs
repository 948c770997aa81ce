use std::sync::Arc;
use tokio::sync::watch;

/// One-way flag raised once the bot has received its `ready` event.
///
/// Clones share the same flag.
#[derive(Clone)]
pub struct ReadySignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ReadySignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);

        Self { tx: Arc::new(tx) }
    }

    /// Raises the flag, waking every pending `wait()`.
    pub fn mark_ready(&self) {
        self.tx.send_replace(true);
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    /// Suspends until the flag is raised; returns immediately if it already is.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}
