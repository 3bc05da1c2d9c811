use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing id source. The first `next()` returns 1.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Last id handed out, 0 if none yet.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
