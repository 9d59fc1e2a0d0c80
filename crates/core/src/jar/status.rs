//! Jar status derivation.
//!
//! A jar's status is never stored independently of its amounts: it is
//! recomputed from `current_amount` and `capacity` on every change.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Progress of a jar towards its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JarStatus {
    /// Nothing saved yet, or the jar has no usable capacity.
    NotStarted,
    /// Some money saved, capacity not reached.
    InProgress,
    /// Current amount reached or exceeded the capacity.
    Completed,
}

impl JarStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for JarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the status of a jar from its current amount and capacity.
///
/// Unset values are treated as "not started" rather than rejected, so the
/// function is total over its inputs.
#[must_use]
pub fn derive_status(current_amount: Option<Decimal>, capacity: Option<Decimal>) -> JarStatus {
    match (current_amount, capacity) {
        (Some(amount), Some(capacity)) if capacity > Decimal::ZERO && !amount.is_zero() => {
            if amount >= capacity {
                JarStatus::Completed
            } else {
                JarStatus::InProgress
            }
        }
        _ => JarStatus::NotStarted,
    }
}
