//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST routes for budgets, jars and expenses
//! - Basic authentication middleware
//! - Request/response DTOs and the JSON error envelope

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use budget_mgt_core::budget::BudgetService;
use budget_mgt_core::expense::ExpenseService;
use budget_mgt_core::jar::JarService;
use budget_mgt_db::{
    MemoryBudgetRepository, MemoryExpenseRepository, MemoryJarRepository, MemoryStore,
};
use budget_mgt_shared::{AuthConfig, PaginationConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Base path every route is mounted under.
pub const BASE_PATH: &str = "/api/budget-mgt/v1";

/// Budget service over the document store.
pub type Budgets = BudgetService<MemoryBudgetRepository>;
/// Jar service over the document store.
pub type Jars = JarService<MemoryJarRepository, MemoryBudgetRepository>;
/// Expense service over the document store.
pub type Expenses = ExpenseService<MemoryExpenseRepository, MemoryBudgetRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Budget service.
    pub budgets: Arc<Budgets>,
    /// Jar service.
    pub jars: Arc<Jars>,
    /// Expense service.
    pub expenses: Arc<Expenses>,
    /// Credentials accepted by the auth middleware.
    pub auth: Arc<AuthConfig>,
    /// Page size limits for list endpoints.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Wires the services to a document store.
    #[must_use]
    pub fn new(store: Arc<MemoryStore>, auth: AuthConfig, pagination: PaginationConfig) -> Self {
        let budget_repo = Arc::new(MemoryBudgetRepository::new(Arc::clone(&store)));
        let jar_repo = Arc::new(MemoryJarRepository::new(Arc::clone(&store)));
        let expense_repo = Arc::new(MemoryExpenseRepository::new(store));

        Self {
            budgets: Arc::new(BudgetService::new(Arc::clone(&budget_repo))),
            jars: Arc::new(JarService::new(jar_repo, Arc::clone(&budget_repo))),
            expenses: Arc::new(ExpenseService::new(expense_repo, budget_repo)),
            auth: Arc::new(auth),
            pagination,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(BASE_PATH, routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
