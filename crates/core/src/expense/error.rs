//! Expense error types.

use budget_mgt_shared::AppError;
use budget_mgt_shared::types::{BudgetId, ExpenseId};
use thiserror::Error;

use crate::store::StoreError;

/// Expense-related errors.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// No expense matches the (expense, budget) pair.
    #[error("Expense with id: {expense_id} not found in budget with id: {budget_id}.")]
    NotFound {
        /// Expense searched for.
        expense_id: ExpenseId,
        /// Budget searched in.
        budget_id: BudgetId,
    },

    /// The owning budget does not exist.
    #[error("Budget with id: {0} not found.")]
    BudgetNotFound(BudgetId),

    /// Budget ID in the body differs from the one in the path.
    #[error("Budget id in body and path don't match.")]
    BudgetMismatch,

    /// Expense ID in the body differs from the one in the path.
    #[error("Expense id in body and path don't match.")]
    ExpenseMismatch,

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound { .. } | ExpenseError::BudgetNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ExpenseError::BudgetMismatch | ExpenseError::ExpenseMismatch => {
                Self::Validation(err.to_string())
            }
            ExpenseError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
