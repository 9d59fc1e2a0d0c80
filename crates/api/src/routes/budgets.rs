//! Budget routes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use budget_mgt_core::budget::{BudgetLookup, IdType, NewBudget};
use budget_mgt_shared::types::{BudgetId, FamilyId};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiResult;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", post(create_budget))
        .route("/budgets/{id}", get(get_budget).delete(delete_budget))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating a budget. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    /// Owning family.
    pub family_id: FamilyId,
    /// Maximum number of jars, 6 when absent.
    pub max_jars: Option<u32>,
}

/// Query parameters of a budget lookup.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// `"id"` (default) or `"family"`.
    pub id_type: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/budgets` - Create a budget for a family.
async fn create_budget(
    State(state): State<AppState>,
    payload: Result<Json<CreateBudgetRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let budget = state
        .budgets
        .create(NewBudget {
            family_id: request.family_id,
            max_jars: request.max_jars,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET `/budgets/{id}?idType=id|family` - Find a budget by ID or by family.
async fn get_budget(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    params: Result<Query<LookupParams>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params?;
    let id_type = match params.id_type {
        Some(raw) => raw.parse::<IdType>()?,
        None => IdType::default(),
    };

    let budget = state
        .budgets
        .find(&BudgetLookup::new(identifier, id_type))
        .await?;

    Ok(Json(budget))
}

/// DELETE `/budgets/{id}` - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<BudgetId>,
) -> ApiResult<impl IntoResponse> {
    state.budgets.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
