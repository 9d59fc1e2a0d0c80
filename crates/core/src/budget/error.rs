//! Budget error types.

use budget_mgt_shared::AppError;
use budget_mgt_shared::types::{BudgetId, FamilyId};
use thiserror::Error;

use crate::store::StoreError;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("Budget with id: {0} not found.")]
    NotFound(BudgetId),

    /// No budget belongs to the family.
    #[error("Budget not found for family with id: {0}")]
    FamilyNotFound(FamilyId),

    /// The family already owns a budget.
    #[error("Conflict during budget creation: family with id: {0} already has a budget")]
    FamilyConflict(FamilyId),

    /// Lookup kind is neither `id` nor `family`.
    #[error("Invalid argument idType={0}, it should be \"id\" or \"family\"")]
    InvalidIdType(String),

    /// Saving a new budget failed.
    #[error("Unexpected error occurred.")]
    Persistence(#[source] StoreError),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NotFound(_) | BudgetError::FamilyNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            BudgetError::FamilyConflict(_) => Self::Conflict(err.to_string()),
            BudgetError::InvalidIdType(_) => Self::Validation(err.to_string()),
            BudgetError::Persistence(_) => Self::Internal(err.to_string()),
            BudgetError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
