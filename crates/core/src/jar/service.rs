//! Jar service implementation.

use std::future::Future;
use std::sync::Arc;

use budget_mgt_shared::types::{BudgetId, JarId, Page, PageRequest};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::JarError;
use super::types::{Jar, JarPatch, NewJar};
use crate::budget::BudgetRepository;
use crate::store::{StoreError, StoredPage};

/// Repository trait for jar persistence.
///
/// This trait is implemented by the db crate to provide actual store operations.
pub trait JarRepository: Send + Sync {
    /// Find a jar by its ID within a budget.
    fn find_by_id_and_budget_id(
        &self,
        id: &JarId,
        budget_id: &BudgetId,
    ) -> impl Future<Output = Result<Option<Jar>, StoreError>> + Send;

    /// Read one page of the jars owned by a budget, in insertion order.
    fn find_page_by_budget_id(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> impl Future<Output = Result<StoredPage<Jar>, StoreError>> + Send;

    /// Insert or replace a jar.
    fn save(&self, jar: Jar) -> impl Future<Output = Result<Jar, StoreError>> + Send;

    /// Delete a jar by (id, budget) pair, returning the number of deleted documents.
    fn delete_by_id_and_budget_id(
        &self,
        id: &JarId,
        budget_id: &BudgetId,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// Jar service for managing the jars of a budget.
pub struct JarService<J: JarRepository, B: BudgetRepository> {
    jars: Arc<J>,
    budgets: Arc<B>,
}

impl<J: JarRepository, B: BudgetRepository> JarService<J, B> {
    /// Create a new jar service.
    #[must_use]
    pub fn new(jars: Arc<J>, budgets: Arc<B>) -> Self {
        Self { jars, budgets }
    }

    /// Create a jar in the budget named by the path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The budget in the input differs from `budget_id`
    /// - The initial amount is negative
    /// - The budget does not exist
    /// - The store fails
    pub async fn create(&self, input: NewJar, budget_id: &BudgetId) -> Result<Jar, JarError> {
        if input.budget_id != *budget_id {
            return Err(JarError::BudgetMismatch);
        }
        ensure_non_negative(input.current_amount)?;
        self.ensure_budget_exists(budget_id).await?;

        let jar = Jar::new(
            JarId::generate(),
            input.budget_id,
            input.jar_name,
            input.current_amount.unwrap_or_default(),
            input.capacity.unwrap_or_default(),
        );
        let saved = self.jars.save(jar).await?;

        info!(
            jar_id = %saved.id(),
            budget_id = %saved.budget_id(),
            status = %saved.status(),
            "Jar created"
        );
        Ok(saved)
    }

    /// Find a jar by (jar, budget) pair.
    ///
    /// # Errors
    ///
    /// Returns `JarError::BudgetNotFound` or `JarError::NotFound` when either is absent.
    pub async fn find(&self, jar_id: &JarId, budget_id: &BudgetId) -> Result<Jar, JarError> {
        self.ensure_budget_exists(budget_id).await?;

        self.jars
            .find_by_id_and_budget_id(jar_id, budget_id)
            .await?
            .ok_or_else(|| JarError::NotFound {
                jar_id: jar_id.clone(),
                budget_id: budget_id.clone(),
            })
    }

    /// Apply a merge-patch to a jar.
    ///
    /// The patch must name the same jar and budget as the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the IDs do not match, the new amount is negative,
    /// the jar cannot be found or the store fails.
    pub async fn update(
        &self,
        jar_id: &JarId,
        budget_id: &BudgetId,
        patch: &JarPatch,
    ) -> Result<Jar, JarError> {
        if patch.id.as_ref() != Some(jar_id) {
            return Err(JarError::JarMismatch);
        }
        if patch.budget_id.as_ref() != Some(budget_id) {
            return Err(JarError::BudgetMismatch);
        }
        ensure_non_negative(patch.current_amount)?;

        let mut origin = self.find(jar_id, budget_id).await?;
        origin.merge_with(patch);
        let saved = self.jars.save(origin).await?;

        debug!(jar_id = %saved.id(), status = %saved.status(), "Jar updated");
        Ok(saved)
    }

    /// Delete a jar from a budget.
    ///
    /// # Errors
    ///
    /// Returns `JarError::BudgetNotFound` if the budget is absent and
    /// `JarError::NotFound` if no document matched the pair.
    pub async fn delete(&self, jar_id: &JarId, budget_id: &BudgetId) -> Result<(), JarError> {
        self.ensure_budget_exists(budget_id).await?;

        let deleted = self
            .jars
            .delete_by_id_and_budget_id(jar_id, budget_id)
            .await?;
        if deleted == 0 {
            return Err(JarError::NotFound {
                jar_id: jar_id.clone(),
                budget_id: budget_id.clone(),
            });
        }

        info!(jar_id = %jar_id, budget_id = %budget_id, "Jar deleted");
        Ok(())
    }

    /// List one page of the jars of a budget.
    ///
    /// # Errors
    ///
    /// Returns `JarError::BudgetNotFound` if the budget is absent.
    pub async fn list_by_budget(
        &self,
        budget_id: &BudgetId,
        page: &PageRequest,
    ) -> Result<Page<Jar>, JarError> {
        self.ensure_budget_exists(budget_id).await?;

        let stored = self.jars.find_page_by_budget_id(budget_id, page).await?;
        Ok(Page::assemble(stored.items, page, stored.total_elements))
    }

    async fn ensure_budget_exists(&self, budget_id: &BudgetId) -> Result<(), JarError> {
        if self.budgets.find_by_id(budget_id).await?.is_none() {
            return Err(JarError::BudgetNotFound(budget_id.clone()));
        }
        Ok(())
    }
}

fn ensure_non_negative(amount: Option<Decimal>) -> Result<(), JarError> {
    match amount {
        Some(amount) if amount < Decimal::ZERO => Err(JarError::NegativeAmount),
        _ => Ok(()),
    }
}
