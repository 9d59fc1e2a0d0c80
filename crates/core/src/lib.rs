//! Core business logic for the budget management service.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached through the repository traits each module declares;
//! the db crate implements them.
//!
//! # Modules
//!
//! - `budget` - Budget lifecycle and the one-budget-per-family rule
//! - `jar` - Savings jars, their derived status and merge-patch updates
//! - `expense` - Logged expenses and merge-patch updates
//! - `store` - Errors and page slices shared by all repositories

pub mod budget;
pub mod expense;
pub mod jar;
pub mod store;
