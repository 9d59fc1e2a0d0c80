//! Budget service implementation.

use std::future::Future;
use std::sync::Arc;

use budget_mgt_shared::types::{BudgetId, FamilyId};
use tracing::{error, info};

use super::error::BudgetError;
use super::types::{Budget, BudgetLookup, DEFAULT_MAX_JARS, NewBudget};
use crate::store::StoreError;

/// Repository trait for budget persistence.
///
/// This trait is implemented by the db crate to provide actual store operations.
/// Implementations must enforce uniqueness of `family_id` and report a
/// violation as `StoreError::Conflict`.
pub trait BudgetRepository: Send + Sync {
    /// Find a budget by ID.
    fn find_by_id(
        &self,
        id: &BudgetId,
    ) -> impl Future<Output = Result<Option<Budget>, StoreError>> + Send;

    /// Find the budget owned by a family.
    fn find_by_family_id(
        &self,
        family_id: &FamilyId,
    ) -> impl Future<Output = Result<Option<Budget>, StoreError>> + Send;

    /// Insert or replace a budget.
    fn save(&self, budget: Budget) -> impl Future<Output = Result<Budget, StoreError>> + Send;

    /// Delete a budget by ID, returning the number of deleted documents.
    fn delete_by_id(&self, id: &BudgetId) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// Budget service for business logic.
pub struct BudgetService<R: BudgetRepository> {
    repo: Arc<R>,
}

impl<R: BudgetRepository> BudgetService<R> {
    /// Create a new budget service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a budget for a family that does not have one yet.
    ///
    /// The pre-check only catches the common case; two concurrent creates for
    /// the same family are settled by the store's unique index, and the loser
    /// surfaces as `BudgetError::Persistence` like any other failed save.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::FamilyConflict` if the family already owns a budget
    /// and `BudgetError::Persistence` if the budget could not be saved.
    pub async fn create(&self, input: NewBudget) -> Result<Budget, BudgetError> {
        if self.repo.find_by_family_id(&input.family_id).await?.is_some() {
            error!(
                family_id = %input.family_id,
                "Failed to create budget, family already has a budget"
            );
            return Err(BudgetError::FamilyConflict(input.family_id));
        }

        let budget = Budget {
            id: BudgetId::generate(),
            family_id: input.family_id,
            max_jars: input.max_jars.unwrap_or(DEFAULT_MAX_JARS),
        };

        match self.repo.save(budget.clone()).await {
            Ok(saved) => {
                info!(budget_id = %saved.id, family_id = %saved.family_id, "Budget created");
                Ok(saved)
            }
            Err(e) => {
                error!(error = %e, budget = ?budget, "Failed to save budget");
                Err(BudgetError::Persistence(e))
            }
        }
    }

    /// Find a budget by ID or by owning family.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` or `BudgetError::FamilyNotFound` if no budget matches.
    pub async fn find(&self, lookup: &BudgetLookup) -> Result<Budget, BudgetError> {
        match lookup {
            BudgetLookup::ById(id) => self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| BudgetError::NotFound(id.clone())),
            BudgetLookup::ByFamily(family_id) => self
                .repo
                .find_by_family_id(family_id)
                .await?
                .ok_or_else(|| BudgetError::FamilyNotFound(family_id.clone())),
        }
    }

    /// Delete a budget. Its jars and expenses are left in place.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` if the budget does not exist.
    pub async fn delete(&self, id: &BudgetId) -> Result<(), BudgetError> {
        self.find(&BudgetLookup::ById(id.clone())).await?;
        self.repo.delete_by_id(id).await?;

        info!(budget_id = %id, "Budget deleted");
        Ok(())
    }
}
