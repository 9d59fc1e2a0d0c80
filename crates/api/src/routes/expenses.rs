//! Expense routes, scoped to a budget.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use budget_mgt_core::expense::{Expense, ExpenseError, ExpensePatch, NewExpense};
use budget_mgt_shared::AppError;
use budget_mgt_shared::types::{BudgetId, ExpenseId, Page};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PageParams;
use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{budget_id}/expenses",
            get(list_expenses).post(create_expense),
        )
        .route(
            "/budgets/{budget_id}/expenses/{expense_id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Expense body accepted by create and update.
///
/// `created` is owned by the server; a value sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    /// Expense ID.
    pub id: Option<ExpenseId>,
    /// Owning budget ID.
    pub budget_id: Option<BudgetId>,
    /// Amount spent.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Free-form comment.
    pub comment: Option<String>,
}

impl ExpenseRequest {
    fn into_new_expense(self) -> Result<NewExpense, ApiError> {
        let budget_id = self.budget_id.ok_or(ExpenseError::BudgetMismatch)?;
        let amount = self
            .amount
            .ok_or_else(|| AppError::Validation("Expense amount is required.".to_string()))?;

        Ok(NewExpense {
            budget_id,
            amount,
            comment: self.comment,
        })
    }

    fn into_patch(self) -> ExpensePatch {
        ExpensePatch {
            id: self.id,
            budget_id: self.budget_id,
            amount: self.amount,
            comment: self.comment,
        }
    }
}

/// Expense as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning budget ID.
    pub budget_id: BudgetId,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-form comment.
    pub comment: Option<String>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            budget_id: expense.budget_id,
            amount: expense.amount,
            comment: expense.comment,
            created: expense.created,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets/{budget_id}/expenses` - List one page of expenses.
async fn list_expenses(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Page<ExpenseResponse>>> {
    let Query(params) = params?;
    let page = params.resolve(&state.pagination)?;

    let expenses = state.expenses.list_by_budget(&budget_id, &page).await?;
    Ok(Json(expenses.map(ExpenseResponse::from)))
}

/// POST `/budgets/{budget_id}/expenses` - Log an expense.
async fn create_expense(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let expense = state
        .expenses
        .create(request.into_new_expense()?, &budget_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// GET `/budgets/{budget_id}/expenses/{expense_id}` - Get an expense.
async fn get_expense(
    State(state): State<AppState>,
    Path((budget_id, expense_id)): Path<(BudgetId, ExpenseId)>,
) -> ApiResult<Json<ExpenseResponse>> {
    let expense = state.expenses.find(&expense_id, &budget_id).await?;
    Ok(Json(expense.into()))
}

/// PUT `/budgets/{budget_id}/expenses/{expense_id}` - Merge-patch an expense.
async fn update_expense(
    State(state): State<AppState>,
    Path((budget_id, expense_id)): Path<(BudgetId, ExpenseId)>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> ApiResult<Json<ExpenseResponse>> {
    let Json(request) = payload?;

    let expense = state
        .expenses
        .update(&expense_id, &budget_id, &request.into_patch())
        .await?;

    Ok(Json(expense.into()))
}

/// DELETE `/budgets/{budget_id}/expenses/{expense_id}` - Delete an expense.
async fn delete_expense(
    State(state): State<AppState>,
    Path((budget_id, expense_id)): Path<(BudgetId, ExpenseId)>,
) -> ApiResult<StatusCode> {
    state.expenses.delete(&expense_id, &budget_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
