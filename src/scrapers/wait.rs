//! Wait-for-condition primitives used in place of fixed sleeps.

use std::thread;
use std::time::{Duration, Instant};

/// Spacing between condition checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Polls `ready` every `interval` until it returns true or `timeout` passes.
///
/// Returns whether the condition was met. Timing out is not an error; the
/// caller proceeds with whatever the page currently shows, the way the
/// original fixed sleeps did.
pub fn poll_until<F>(timeout: Duration, interval: Duration, mut ready: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        if ready() {
            return true;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return false;
        }
        thread::sleep(interval.min(remaining));
    }
}
