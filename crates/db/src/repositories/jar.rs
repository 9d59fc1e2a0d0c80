//! Jar repository over the `jar` collection.

use std::sync::Arc;

use budget_mgt_core::jar::{Jar, JarRepository};
use budget_mgt_core::store::{StoreError, StoredPage};
use budget_mgt_shared::types::{BudgetId, JarId, PageRequest};

use crate::store::{MemoryStore, page_of};

/// Jar repository implementation.
#[derive(Debug, Clone)]
pub struct MemoryJarRepository {
    store: Arc<MemoryStore>,
}

impl MemoryJarRepository {
    /// Create a new jar repository.
    #[must_use]
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl JarRepository for MemoryJarRepository {
    async fn find_by_id_and_budget_id(
        &self,
        id: &JarId,
        budget_id: &BudgetId,
    ) -> Result<Option<Jar>, StoreError> {
        Ok(self
            .store
            .jars()
            .get(id)
            .filter(|entry| entry.doc.budget_id() == budget_id)
            .map(|entry| entry.doc.clone()))
    }

    async fn find_page_by_budget_id(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> Result<StoredPage<Jar>, StoreError> {
        Ok(page_of(self.store.jars(), page, |jar| {
            jar.budget_id() == budget_id
        }))
    }

    async fn save(&self, jar: Jar) -> Result<Jar, StoreError> {
        self.store
            .upsert(self.store.jars(), jar.id().clone(), jar.clone());
        Ok(jar)
    }

    async fn delete_by_id_and_budget_id(
        &self,
        id: &JarId,
        budget_id: &BudgetId,
    ) -> Result<u64, StoreError> {
        let removed = self
            .store
            .jars()
            .remove_if(id, |_, entry| entry.doc.budget_id() == budget_id);
        Ok(u64::from(removed.is_some()))
    }
}
