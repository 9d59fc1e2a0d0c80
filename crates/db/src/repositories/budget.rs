//! Budget repository over the `budget` collection.

use std::sync::Arc;

use budget_mgt_core::budget::{Budget, BudgetRepository};
use budget_mgt_core::store::StoreError;
use budget_mgt_shared::types::{BudgetId, FamilyId};

use crate::store::MemoryStore;

/// Budget repository implementation.
#[derive(Debug, Clone)]
pub struct MemoryBudgetRepository {
    store: Arc<MemoryStore>,
}

impl MemoryBudgetRepository {
    /// Create a new budget repository.
    #[must_use]
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl BudgetRepository for MemoryBudgetRepository {
    async fn find_by_id(&self, id: &BudgetId) -> Result<Option<Budget>, StoreError> {
        Ok(self.store.budget_by_id(id))
    }

    async fn find_by_family_id(&self, family_id: &FamilyId) -> Result<Option<Budget>, StoreError> {
        Ok(self.store.budget_by_family(family_id))
    }

    async fn save(&self, budget: Budget) -> Result<Budget, StoreError> {
        self.store.upsert_budget(budget)
    }

    async fn delete_by_id(&self, id: &BudgetId) -> Result<u64, StoreError> {
        Ok(self.store.remove_budget(id))
    }
}
