//! Document store layer.
//!
//! This crate provides:
//! - [`MemoryStore`], a concurrent in-process store holding the budget, jar
//!   and expense collections
//! - Repository implementations of the core traits on top of it

pub mod repositories;
pub mod store;

pub use repositories::{MemoryBudgetRepository, MemoryExpenseRepository, MemoryJarRepository};
pub use store::MemoryStore;
