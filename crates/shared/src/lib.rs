//! Shared types, errors, and configuration for the budget management service.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for budgets, families, jars and expenses
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, AuthConfig, PaginationConfig, ServerConfig};
pub use error::AppError;
