use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between a caller and an in-flight
/// resolution.
///
/// Cloning hands out another handle to the same flag. The scan checks the
/// flag once per visited directory, so cancellation takes effect at the next
/// visit rather than mid-directory.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.fired.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
