//! Expense repository over the `expense` collection.

use std::sync::Arc;

use budget_mgt_core::expense::{Expense, ExpenseRepository};
use budget_mgt_core::store::{StoreError, StoredPage};
use budget_mgt_shared::types::{BudgetId, ExpenseId, PageRequest};

use crate::store::{MemoryStore, page_of};

/// Expense repository implementation.
#[derive(Debug, Clone)]
pub struct MemoryExpenseRepository {
    store: Arc<MemoryStore>,
}

impl MemoryExpenseRepository {
    /// Create a new expense repository.
    #[must_use]
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl ExpenseRepository for MemoryExpenseRepository {
    async fn find_by_id_and_budget_id(
        &self,
        id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> Result<Option<Expense>, StoreError> {
        Ok(self
            .store
            .expenses()
            .get(id)
            .filter(|entry| entry.doc.budget_id == *budget_id)
            .map(|entry| entry.doc.clone()))
    }

    async fn find_page_by_budget_id(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> Result<StoredPage<Expense>, StoreError> {
        Ok(page_of(self.store.expenses(), page, |expense| {
            expense.budget_id == *budget_id
        }))
    }

    async fn save(&self, expense: Expense) -> Result<Expense, StoreError> {
        self.store
            .upsert(self.store.expenses(), expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn delete_by_id_and_budget_id(
        &self,
        id: &ExpenseId,
        budget_id: &BudgetId,
    ) -> Result<u64, StoreError> {
        let removed = self
            .store
            .expenses()
            .remove_if(id, |_, entry| entry.doc.budget_id == *budget_id);
        Ok(u64::from(removed.is_some()))
    }
}
