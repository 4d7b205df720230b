use tokio::sync::watch;

/// Change-notification signal: a monotonically increasing generation that
/// dependent screens watch to know when to refetch.
///
/// Publishers: enquiry submission, profile updates, logout. In-memory only,
/// never persisted.
#[derive(Debug)]
pub struct RefreshSignal {
    tx: watch::Sender<u64>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub fn trigger(&self) {
        self.tx.send_modify(|generation| *generation += 1);
        tracing::debug!(generation = *self.tx.borrow(), "refresh triggered");
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}
