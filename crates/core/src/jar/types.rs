//! Jar data types.

use budget_mgt_shared::types::{BudgetId, JarId};
use rust_decimal::Decimal;

use super::status::{JarStatus, derive_status};

/// A savings jar owned by a budget.
///
/// `status` has no setter: it is recomputed by the constructor, by
/// [`Jar::set_current_amount`], [`Jar::set_capacity`] and [`Jar::merge_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Jar {
    id: JarId,
    budget_id: BudgetId,
    jar_name: Option<String>,
    current_amount: Decimal,
    capacity: Decimal,
    status: JarStatus,
}

impl Jar {
    /// Creates a jar and derives its initial status.
    #[must_use]
    pub fn new(
        id: JarId,
        budget_id: BudgetId,
        jar_name: Option<String>,
        current_amount: Decimal,
        capacity: Decimal,
    ) -> Self {
        Self {
            id,
            budget_id,
            jar_name,
            current_amount,
            capacity,
            status: derive_status(Some(current_amount), Some(capacity)),
        }
    }

    /// Jar ID.
    #[must_use]
    pub fn id(&self) -> &JarId {
        &self.id
    }

    /// Owning budget ID.
    #[must_use]
    pub fn budget_id(&self) -> &BudgetId {
        &self.budget_id
    }

    /// Optional display name.
    #[must_use]
    pub fn jar_name(&self) -> Option<&str> {
        self.jar_name.as_deref()
    }

    /// Amount saved so far.
    #[must_use]
    pub fn current_amount(&self) -> Decimal {
        self.current_amount
    }

    /// Savings target.
    #[must_use]
    pub fn capacity(&self) -> Decimal {
        self.capacity
    }

    /// Derived status.
    #[must_use]
    pub fn status(&self) -> JarStatus {
        self.status
    }

    /// Renames the jar.
    pub fn set_jar_name(&mut self, jar_name: Option<String>) -> &mut Self {
        self.jar_name = jar_name;
        self
    }

    /// Changes the saved amount and recomputes the status.
    pub fn set_current_amount(&mut self, current_amount: Decimal) -> &mut Self {
        self.current_amount = current_amount;
        self.refresh_status();
        self
    }

    /// Changes the savings target and recomputes the status.
    pub fn set_capacity(&mut self, capacity: Decimal) -> &mut Self {
        self.capacity = capacity;
        self.refresh_status();
        self
    }

    /// Applies a merge-patch.
    ///
    /// Every `Some` field of the patch overwrites the corresponding field;
    /// `None` fields and an empty `jar_name` leave the jar untouched.
    pub fn merge_with(&mut self, patch: &JarPatch) -> &mut Self {
        if let Some(id) = &patch.id {
            self.id = id.clone();
        }
        if let Some(budget_id) = &patch.budget_id {
            self.budget_id = budget_id.clone();
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(current_amount) = patch.current_amount {
            self.current_amount = current_amount;
        }
        if let Some(jar_name) = patch.jar_name.as_deref().filter(|name| !name.is_empty()) {
            self.jar_name = Some(jar_name.to_owned());
        }
        self.refresh_status();
        self
    }

    fn refresh_status(&mut self) {
        self.status = derive_status(Some(self.current_amount), Some(self.capacity));
    }
}

/// Input for creating a jar.
#[derive(Debug, Clone)]
pub struct NewJar {
    /// Budget the jar should belong to; must match the budget in the path.
    pub budget_id: BudgetId,
    /// Optional display name.
    pub jar_name: Option<String>,
    /// Initial saved amount, zero when absent.
    pub current_amount: Option<Decimal>,
    /// Savings target, zero when absent.
    pub capacity: Option<Decimal>,
}

/// Merge-patch for a jar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JarPatch {
    /// Jar ID; must match the jar being updated.
    pub id: Option<JarId>,
    /// Budget ID; must match the owning budget.
    pub budget_id: Option<BudgetId>,
    /// New display name (ignored when empty).
    pub jar_name: Option<String>,
    /// New saved amount.
    pub current_amount: Option<Decimal>,
    /// New savings target.
    pub capacity: Option<Decimal>,
}
