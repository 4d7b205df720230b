use std::sync::atomic::{AtomicU64, Ordering};

/// Stamp handed out when a fetch is dispatched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Generation(u64);

/// Per-screen monotonic counter that decides whether a completed response
/// may still be applied: only the latest dispatched fetch wins, so a slow
/// earlier response can never overwrite a later one.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: AtomicU64,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new fetch as the latest dispatched one.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response carrying `stamp` is still the latest dispatch.
    pub fn is_current(&self, stamp: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == stamp.0
    }
}
