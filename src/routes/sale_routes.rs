use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::sale_controller::SaleController;
use crate::dto::common::ApiResponse;
use crate::dto::sale_dto::{
    CommissionSummaryResponse, CreateSaleRequest, SaleFilters, SaleResponse,
    UpdateSaleStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::Role;
use crate::services::authorization_service;
use crate::state::AppState;
use crate::utils::errors::{forbidden_error, AppError};

pub fn create_sale_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sale))
        .route("/", get(list_sales))
        .route("/:id", get(get_sale))
        .route("/:id", delete(delete_sale))
        .route("/:id/status", put(update_sale_status))
        .route("/commissions/:salesperson_id", get(get_commissions))
}

async fn create_sale(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateSaleRequest>,
) -> Result<Json<ApiResponse<SaleResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("create sales", "insufficient role"));
    }
    let controller = SaleController::new(state.pool.clone());
    let response = controller.create(request, user.user_id).await?;
    Ok(Json(response))
}

async fn list_sales(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Query(filters): Query<SaleFilters>,
) -> Result<Json<Vec<SaleResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("view sales", "insufficient role"));
    }
    let controller = SaleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_sale(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaleResponse>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("view sales", "insufficient role"));
    }
    let controller = SaleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_sale_status(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSaleStatusRequest>,
) -> Result<Json<ApiResponse<SaleResponse>>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("update sales", "insufficient role"));
    }
    let controller = SaleController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_sale(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    // borrar ventas es cosa de admin/manager
    if !authorization_service::can_delete_sale(user.role) {
        return Err(forbidden_error("delete sales", "admin or manager role required"));
    }
    let controller = SaleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sale deleted successfully"
    })))
}

async fn get_commissions(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(salesperson_id): Path<Uuid>,
) -> Result<Json<CommissionSummaryResponse>, AppError> {
    if !authorization_service::can_access_sales(user.role) {
        return Err(forbidden_error("view commissions", "insufficient role"));
    }
    // un vendedor solo consulta sus propias comisiones
    let is_supervisor = matches!(user.role, Role::Admin | Role::Manager);
    if !is_supervisor && user.user_id != salesperson_id {
        return Err(forbidden_error(
            "view commissions",
            "salespeople can only view their own commissions",
        ));
    }
    let controller = SaleController::new(state.pool.clone());
    let response = controller.commissions(salesperson_id).await?;
    Ok(Json(response))
}
