//! Task ID generation.
//!
//! Task IDs are random (version 4) UUIDs. Tests can switch to a
//! deterministic counter so that IDs are predictable.

use std::cell::Cell;
use uuid::Uuid;

thread_local! {
    /// Counter for deterministic ID generation, `None` when disabled.
    static TEST_COUNTER: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Enable deterministic ID generation on the current thread.
///
/// When enabled, IDs are built from a counter starting at 1 instead of
/// random bytes.
pub fn enable_deterministic_ids() {
    TEST_COUNTER.with(|c| c.set(Some(0)));
}

/// Disable deterministic ID generation on the current thread.
pub fn disable_deterministic_ids() {
    TEST_COUNTER.with(|c| c.set(None));
}

/// Generate a new task ID.
#[must_use]
pub fn generate_task_id() -> Uuid {
    TEST_COUNTER.with(|c| match c.get() {
        Some(count) => {
            let next = count + 1;
            c.set(Some(next));
            Uuid::from_u128(u128::from(next))
        }
        None => Uuid::new_v4(),
    })
}
