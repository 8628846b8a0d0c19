//! Expiry precondition shared by every mutating operation.

use crate::domain::Timestamp;
use crate::error::{Result, SwapError};

/// Rejects calls that arrive after their deadline.
///
/// Stateless.  The engine calls it before any other validation, so an
/// expired call fails with [`SwapError::Expired`] whatever else is wrong with
/// it and touches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineGuard;

impl DeadlineGuard {
    /// Succeeds while `now <= deadline`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Expired`] when `now` is strictly after `deadline`.
    pub fn check(deadline: Timestamp, now: Timestamp) -> Result<()> {
        if now > deadline {
            return Err(SwapError::Expired { deadline, now });
        }
        Ok(())
    }
}
