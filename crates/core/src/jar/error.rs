//! Jar error types.

use budget_mgt_shared::AppError;
use budget_mgt_shared::types::{BudgetId, JarId};
use thiserror::Error;

use crate::store::StoreError;

/// Jar-related errors.
#[derive(Debug, Error)]
pub enum JarError {
    /// No jar matches the (jar, budget) pair.
    #[error("Jar with id: {jar_id} not found in budget with id: {budget_id}")]
    NotFound {
        /// Jar searched for.
        jar_id: JarId,
        /// Budget searched in.
        budget_id: BudgetId,
    },

    /// The owning budget does not exist.
    #[error("Budget with id: {0} not found.")]
    BudgetNotFound(BudgetId),

    /// Budget ID in the body differs from the one in the path.
    #[error("Budget id in body and path don't match.")]
    BudgetMismatch,

    /// Jar ID in the body differs from the one in the path.
    #[error("Jar id in body and path don't match.")]
    JarMismatch,

    /// Current amount cannot be negative.
    #[error("Current amount cannot be negative")]
    NegativeAmount,

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<JarError> for AppError {
    fn from(err: JarError) -> Self {
        match err {
            JarError::NotFound { .. } | JarError::BudgetNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            JarError::BudgetMismatch | JarError::JarMismatch | JarError::NegativeAmount => {
                Self::Validation(err.to_string())
            }
            JarError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
