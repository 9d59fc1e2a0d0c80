//! Expense service implementation.

use std::future::Future;
use std::sync::Arc;

use budget_mgt_shared::types::{BudgetId, ExpenseId, Page, PageRequest};
use chrono::Utc;
use tracing::{debug, info};

use super::error::ExpenseError;
use super::types::{Expense, ExpensePatch, NewExpense};
use crate::budget::BudgetRepository;
use crate::store::{StoreError, StoredPage};

/// Repository trait for expense persistence.
pub trait ExpenseRepository: Send + Sync {
    /// Find an expense by its ID within a budget.
    fn find_by_id_and_budget_id(
        &self,
        id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> impl Future<Output = Result<Option<Expense>, StoreError>> + Send;

    /// Read one page of the expenses of a budget, in insertion order.
    fn find_page_by_budget_id(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> impl Future<Output = Result<StoredPage<Expense>, StoreError>> + Send;

    /// Insert or replace an expense.
    fn save(&self, expense: Expense) -> impl Future<Output = Result<Expense, StoreError>> + Send;

    /// Delete an expense by (id, budget) pair, returning the number of deleted documents.
    fn delete_by_id_and_budget_id(
        &self,
        id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// Expense service for logging spending against a budget.
pub struct ExpenseService<E: ExpenseRepository, B: BudgetRepository> {
    expenses: Arc<E>,
    budgets: Arc<B>,
}

impl<E: ExpenseRepository, B: BudgetRepository> ExpenseService<E, B> {
    /// Create a new expense service.
    #[must_use]
    pub fn new(expenses: Arc<E>, budgets: Arc<B>) -> Self {
        Self { expenses, budgets }
    }

    /// Log an expense, stamping its creation time.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::BudgetMismatch` if the input names another budget,
    /// `ExpenseError::BudgetNotFound` if the budget is absent, or a store error.
    pub async fn create(
        &self,
        input: NewExpense,
        budget_id: &BudgetId,
    ) -> Result<Expense, ExpenseError> {
        if input.budget_id != *budget_id {
            return Err(ExpenseError::BudgetMismatch);
        }
        self.ensure_budget_exists(budget_id).await?;

        let expense = Expense {
            id: ExpenseId::generate(),
            budget_id: input.budget_id,
            amount: input.amount,
            comment: input.comment,
            created: Utc::now(),
        };
        let saved = self.expenses.save(expense).await?;

        info!(
            expense_id = %saved.id,
            budget_id = %saved.budget_id,
            amount = %saved.amount,
            "Expense created"
        );
        Ok(saved)
    }

    /// Find an expense by (expense, budget) pair.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::BudgetNotFound` or `ExpenseError::NotFound` when either is absent.
    pub async fn find(
        &self,
        expense_id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> Result<Expense, ExpenseError> {
        self.ensure_budget_exists(budget_id).await?;

        self.expenses
            .find_by_id_and_budget_id(expense_id, budget_id)
            .await?
            .ok_or_else(|| ExpenseError::NotFound {
                expense_id: expense_id.clone(),
                budget_id: budget_id.clone(),
            })
    }

    /// Apply a merge-patch to an expense. The creation time is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the IDs do not match the path, the expense cannot
    /// be found or the store fails.
    pub async fn update(
        &self,
        expense_id: &ExpenseId,
        budget_id: &BudgetId,
        patch: &ExpensePatch,
    ) -> Result<Expense, ExpenseError> {
        if patch.id.as_ref() != Some(expense_id) {
            return Err(ExpenseError::ExpenseMismatch);
        }
        if patch.budget_id.as_ref() != Some(budget_id) {
            return Err(ExpenseError::BudgetMismatch);
        }

        let mut origin = self.find(expense_id, budget_id).await?;
        origin.merge_with(patch);
        let saved = self.expenses.save(origin).await?;

        debug!(expense_id = %saved.id, amount = %saved.amount, "Expense updated");
        Ok(saved)
    }

    /// Delete an expense from a budget.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if the pair does not exist.
    pub async fn delete(
        &self,
        expense_id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> Result<(), ExpenseError> {
        self.find(expense_id, budget_id).await?;
        self.expenses
            .delete_by_id_and_budget_id(expense_id, budget_id)
            .await?;

        info!(expense_id = %expense_id, budget_id = %budget_id, "Expense deleted");
        Ok(())
    }

    /// List one page of the expenses of a budget.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::BudgetNotFound` if the budget is absent.
    pub async fn list_by_budget(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> Result<Page<Expense>, ExpenseError> {
        self.ensure_budget_exists(budget_id).await?;

        let stored = self.expenses.find_page_by_budget_id(budget_id, page).await?;
        Ok(Page::assemble(stored.items, page, stored.total_elements))
    }

    async fn ensure_budget_exists(&self, budget_id: &BudgetId) -> Result<(), ExpenseError> {
        if self.budgets.find_by_id(budget_id).await?.is_none() {
            return Err(ExpenseError::BudgetNotFound(budget_id.clone()));
        }
        Ok(())
    }
}
