//! API route definitions.

use axum::{Router, middleware};
use budget_mgt_shared::types::PageRequest;
use budget_mgt_shared::{AppError, PaginationConfig};
use serde::Deserialize;

use crate::{AppState, error::ApiError, middleware::basic_auth_middleware};

pub mod budgets;
pub mod expenses;
pub mod health;
pub mod jars;

/// Creates the API router; everything except the health check sits behind
/// the auth middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(budgets::routes())
        .merge(jars::routes())
        .merge(expenses::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}

/// `page` and `limit` query parameters of list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Page number (0-indexed).
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl PageParams {
    /// Applies defaults and validates the page size.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `limit` is zero or above the configured maximum.
    pub fn resolve(self, config: &PaginationConfig) -> Result<PageRequest, ApiError> {
        let limit = self.limit.unwrap_or(config.default_limit);
        if limit == 0 || limit > config.max_limit {
            return Err(AppError::Validation(format!(
                "Invalid argument limit={limit}, it should be between 1 and {}",
                config.max_limit
            ))
            .into());
        }
        Ok(PageRequest::new(self.page.unwrap_or(0), limit))
    }
}
