use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token tied to the lifetime of a hosting view.
///
/// Async flows hold a clone and must check it after every await before
/// mutating any view-facing state; once the view is torn down the flag
/// flips and in-flight results are dropped instead of applied.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
