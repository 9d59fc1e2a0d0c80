//! Expenses logged against a budget.

pub mod error;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use service::{ExpenseRepository, ExpenseService};
pub use types::{Expense, ExpensePatch, NewExpense};
