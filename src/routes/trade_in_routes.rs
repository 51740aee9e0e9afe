use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::trade_in_controller::TradeInController;
use crate::dto::common::ApiResponse;
use crate::dto::trade_in_dto::{CreateTradeInRequest, TradeInResponse, UpdateTradeInRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::services::authorization_service;
use crate::state::AppState;
use crate::utils::errors::{forbidden_error, AppError};

#[derive(Debug, Deserialize)]
struct Pagination {
    limit: Option<i64>,
    offset: Option<i64>,
}

pub fn create_trade_in_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trade_in))
        .route("/", get(list_trade_ins))
        .route("/:id", get(get_trade_in))
        .route("/:id", put(update_trade_in))
        .route("/:id", delete(delete_trade_in))
}

async fn create_trade_in(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateTradeInRequest>,
) -> Result<Json<ApiResponse<TradeInResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("record trade-ins", "insufficient role"));
    }
    let controller = TradeInController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_trade_ins(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<TradeInResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("view trade-ins", "insufficient role"));
    }
    let controller = TradeInController::new(state.pool.clone());
    let response = controller.list(pagination.limit, pagination.offset).await?;
    Ok(Json(response))
}

async fn get_trade_in(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TradeInResponse>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("view trade-ins", "insufficient role"));
    }
    let controller = TradeInController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_trade_in(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTradeInRequest>,
) -> Result<Json<ApiResponse<TradeInResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("manage trade-ins", "insufficient role"));
    }
    let controller = TradeInController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_trade_in(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("delete trade-ins", "insufficient role"));
    }
    let controller = TradeInController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Trade-in deleted successfully"
    })))
}
