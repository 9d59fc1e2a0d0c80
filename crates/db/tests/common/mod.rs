//! Shared fixtures for service tests over the memory store.

#![allow(dead_code)]

use std::sync::Arc;

use budget_mgt_core::budget::{Budget, BudgetService, NewBudget};
use budget_mgt_core::expense::ExpenseService;
use budget_mgt_core::jar::JarService;
use budget_mgt_db::{
    MemoryBudgetRepository, MemoryExpenseRepository, MemoryJarRepository, MemoryStore,
};
use budget_mgt_shared::types::FamilyId;

/// All three services wired to one store.
pub struct Services {
    pub store: Arc<MemoryStore>,
    pub budgets: BudgetService<MemoryBudgetRepository>,
    pub jars: JarService<MemoryJarRepository, MemoryBudgetRepository>,
    pub expenses: ExpenseService<MemoryExpenseRepository, MemoryBudgetRepository>,
}

pub fn services() -> Services {
    let store = Arc::new(MemoryStore::new());
    let budget_repo = Arc::new(MemoryBudgetRepository::new(store.clone()));

    Services {
        budgets: BudgetService::new(budget_repo.clone()),
        jars: JarService::new(Arc::new(MemoryJarRepository::new(store.clone())), budget_repo.clone()),
        expenses: ExpenseService::new(
            Arc::new(MemoryExpenseRepository::new(store.clone())),
            budget_repo,
        ),
        store,
    }
}

pub async fn budget_for(services: &Services, family: &str) -> Budget {
    services
        .budgets
        .create(NewBudget {
            family_id: FamilyId::from(family),
            max_jars: None,
        })
        .await
        .unwrap()
}
