//! Time sources for deadline checks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::Timestamp;

/// Supplies the current time to the pool.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Clocks set before 1970 read as the epoch.
        let secs = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// Manually driven clock for tests and simulations.
///
/// Clones share the same instant, so a test can keep one handle and move
/// time while the pool holds another.
///
/// ```
/// use simple_swap::domain::Timestamp;
/// use simple_swap::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// let view = clock.clone();
/// clock.advance(5);
/// assert_eq!(view.now(), Timestamp::from_secs(105));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: Arc::new(AtomicU64::new(start.as_secs())),
        }
    }

    /// Jumps to `at`.
    pub fn set(&self, at: Timestamp) {
        self.secs.store(at.as_secs(), Ordering::SeqCst);
    }

    /// Moves forward by `secs`, saturating.
    pub fn advance(&self, secs: u64) {
        let _ = self
            .secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| {
                Some(s.saturating_add(secs))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now().as_secs() > 1_577_836_800);
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new(Timestamp::from_secs(10));
        assert_eq!(clock.now(), Timestamp::from_secs(10));
        clock.advance(3);
        assert_eq!(clock.now(), Timestamp::from_secs(13));
        clock.set(Timestamp::from_secs(1));
        assert_eq!(clock.now(), Timestamp::from_secs(1));
    }

    #[test]
    fn manual_clock_saturates() {
        let clock = ManualClock::new(Timestamp::MAX);
        clock.advance(1);
        assert_eq!(clock.now(), Timestamp::MAX);
    }

    #[test]
    fn clones_share_time() {
        let a = ManualClock::default();
        let b = a.clone();
        a.advance(7);
        assert_eq!(b.now(), Timestamp::from_secs(7));
    }
}
