//! Expense data types.

use budget_mgt_shared::types::{BudgetId, ExpenseId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// An expense logged against a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning budget ID.
    pub budget_id: BudgetId,
    /// Amount spent.
    pub amount: Decimal,
    /// Optional free-form comment.
    pub comment: Option<String>,
    /// Creation timestamp, set once by the service.
    pub created: DateTime<Utc>,
}

impl Expense {
    /// Applies a merge-patch.
    ///
    /// Every `Some` field of the patch overwrites the corresponding field;
    /// `None` fields and an empty `comment` leave the expense untouched.
    /// `created` is not part of a patch and never changes.
    pub fn merge_with(&mut self, patch: &ExpensePatch) -> &mut Self {
        if let Some(id) = &patch.id {
            self.id = id.clone();
        }
        if let Some(budget_id) = &patch.budget_id {
            self.budget_id = budget_id.clone();
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(comment) = patch.comment.as_deref().filter(|c| !c.is_empty()) {
            self.comment = Some(comment.to_owned());
        }
        self
    }
}

/// Input for creating an expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Budget the expense belongs to; must match the budget in the path.
    pub budget_id: BudgetId,
    /// Amount spent.
    pub amount: Decimal,
    /// Optional comment.
    pub comment: Option<String>,
}

/// Merge-patch for an expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    /// Expense ID; must match the expense being updated.
    pub id: Option<ExpenseId>,
    /// Budget ID; must match the owning budget.
    pub budget_id: Option<BudgetId>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New comment (ignored when empty).
    pub comment: Option<String>,
}
