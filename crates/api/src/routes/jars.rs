//! Jar routes, scoped to a budget.

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
use budget_mgt_core::jar::{Jar, JarError, JarPatch, JarStatus, NewJar};
use budget_mgt_shared::types::{BudgetId, JarId, Page};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PageParams;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the jar routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{budget_id}/jars",
            get(list_jars).post(create_jar),
        )
        .route(
            "/budgets/{budget_id}/jars/{jar_id}",
            get(get_jar).put(update_jar).delete(delete_jar),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Jar body accepted by create and update.
///
/// On create, `id` is ignored and `budgetId` must match the path. On update,
/// both must match the path and every other present field is merged in.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JarRequest {
    /// Jar ID.
    pub id: Option<JarId>,
    /// Owning budget ID.
    pub budget_id: Option<BudgetId>,
    /// Display name.
    pub jar_name: Option<String>,
    /// Amount saved so far.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_amount: Option<Decimal>,
    /// Savings target.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub capacity: Option<Decimal>,
}

impl JarRequest {
    fn into_new_jar(self) -> Result<NewJar, JarError> {
        Ok(NewJar {
            budget_id: self.budget_id.ok_or(JarError::BudgetMismatch)?,
            jar_name: self.jar_name,
            current_amount: self.current_amount,
            capacity: self.capacity,
        })
    }

    fn into_patch(self) -> JarPatch {
        JarPatch {
            id: self.id,
            budget_id: self.budget_id,
            jar_name: self.jar_name,
            current_amount: self.current_amount,
            capacity: self.capacity,
        }
    }
}

/// Jar as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JarResponse {
    /// Jar ID.
    pub id: JarId,
    /// Owning budget ID.
    pub budget_id: BudgetId,
    /// Display name.
    pub jar_name: Option<String>,
    /// Amount saved so far.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    /// Savings target.
    #[serde(with = "rust_decimal::serde::float")]
    pub capacity: Decimal,
    /// Derived status.
    pub status: JarStatus,
}

impl From<Jar> for JarResponse {
    fn from(jar: Jar) -> Self {
        Self {
            id: jar.id().clone(),
            budget_id: jar.budget_id().clone(),
            jar_name: jar.jar_name().map(str::to_owned),
            current_amount: jar.current_amount(),
            capacity: jar.capacity(),
            status: jar.status(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets/{budget_id}/jars` - List one page of jars.
async fn list_jars(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<Json<Page<JarResponse>>> {
    let Query(params) = params?;
    let page = params.resolve(&state.pagination)?;

    let jars = state.jars.list_by_budget(&budget_id, &page).await?;
    Ok(Json(jars.map(JarResponse::from)))
}

/// POST `/budgets/{budget_id}/jars` - Create a jar.
async fn create_jar(
    State(state): State<AppState>,
    Path(budget_id): Path<BudgetId>,
    payload: Result<Json<JarRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let jar = state
        .jars
        .create(request.into_new_jar()?, &budget_id)
        .await?;

    Ok((StatusCode::CREATED, Json(JarResponse::from(jar))))
}

/// GET `/budgets/{budget_id}/jars/{jar_id}` - Get a jar.
async fn get_jar(
    State(state): State<AppState>,
    Path((budget_id, jar_id)): Path<(BudgetId, JarId)>,
) -> ApiResult<Json<JarResponse>> {
    let jar = state.jars.find(&jar_id, &budget_id).await?;
    Ok(Json(jar.into()))
}

/// PUT `/budgets/{budget_id}/jars/{jar_id}` - Merge-patch a jar.
async fn update_jar(
    State(state): State<AppState>,
    Path((budget_id, jar_id)): Path<(BudgetId, JarId)>,
    payload: Result<Json<JarRequest>, JsonRejection>,
) -> ApiResult<Json<JarResponse>> {
    let Json(request) = payload?;

    let jar = state
        .jars
        .update(&jar_id, &budget_id, &request.into_patch())
        .await?;

    Ok(Json(jar.into()))
}

/// DELETE `/budgets/{budget_id}/jars/{jar_id}` - Delete a jar.
async fn delete_jar(
    State(state): State<AppState>,
    Path((budget_id, jar_id)): Path<(BudgetId, JarId)>,
) -> ApiResult<StatusCode> {
    state.jars.delete(&jar_id, &budget_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
