//! Budget data types.

use std::str::FromStr;

use budget_mgt_shared::types::{BudgetId, FamilyId};
use serde::Serialize;

use super::error::BudgetError;

/// Number of jars a budget is created with when the caller does not say.
pub const DEFAULT_MAX_JARS: u32 = 6;

/// A family budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning family; at most one budget per family.
    pub family_id: FamilyId,
    /// Advisory cap on the number of jars. Not enforced.
    pub max_jars: u32,
}

/// Input for creating a new budget.
#[derive(Debug, Clone)]
pub struct NewBudget {
    /// Owning family.
    pub family_id: FamilyId,
    /// Jar cap, [`DEFAULT_MAX_JARS`] when absent.
    pub max_jars: Option<u32>,
}

/// Key used to look a budget up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetLookup {
    /// By budget ID.
    ById(BudgetId),
    /// By owning family.
    ByFamily(FamilyId),
}

/// Kind of identifier a client sends alongside a budget lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdType {
    /// The identifier is a budget ID.
    #[default]
    Id,
    /// The identifier is a family ID.
    Family,
}

impl FromStr for IdType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "family" => Ok(Self::Family),
            other => Err(BudgetError::InvalidIdType(other.to_string())),
        }
    }
}

impl BudgetLookup {
    /// Builds a lookup from a raw identifier and the kind it names.
    #[must_use]
    pub fn new(identifier: impl Into<String>, id_type: IdType) -> Self {
        match id_type {
            IdType::Id => Self::ById(BudgetId::from(identifier.into())),
            IdType::Family => Self::ByFamily(FamilyId::from(identifier.into())),
        }
    }
}
