//! Budget lifecycle and the one-budget-per-family rule.

pub mod error;
pub mod service;
pub mod types;


pub use error::BudgetError;
pub use service::{BudgetRepository, BudgetService};
pub use types::{Budget, BudgetLookup, DEFAULT_MAX_JARS, IdType, NewBudget};
