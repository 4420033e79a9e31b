use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

/// Cooperative interruption flag polled by traversals of possibly unbounded sequences.
static INTERRUPT: Lazy<AtomicBool> = Lazy::new(AtomicBool::default);

/// Clears a previously sent stop request.
pub fn reset_stop() {
    INTERRUPT.store(false, Ordering::SeqCst);
}

/// Requests that any traversal in progress stops at the next visited position, surfacing as
/// [`SeqError::Interrupt`](crate::base::SeqError).
pub fn send_stop() {
    INTERRUPT.store(true, Ordering::SeqCst);
}

pub fn should_stop() -> bool {
    INTERRUPT.load(Ordering::SeqCst)
}
