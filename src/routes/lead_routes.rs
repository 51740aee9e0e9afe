use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::lead_controller::LeadController;
use crate::dto::common::ApiResponse;
use crate::dto::lead_dto::{
    ConvertLeadResponse, CreateLeadRequest, LeadFilters, LeadResponse, UpdateLeadRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::services::authorization_service;
use crate::state::AppState;
use crate::utils::errors::{forbidden_error, AppError};

pub fn create_lead_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_lead))
        .route("/", get(list_leads))
        .route("/:id", get(get_lead))
        .route("/:id", put(update_lead))
        .route("/:id", delete(delete_lead))
        .route("/:id/convert", post(convert_lead))
}

async fn create_lead(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<Json<ApiResponse<LeadResponse>>, AppError> {
    if !authorization_service::can_access_leads(user.role) {
        return Err(forbidden_error("manage leads", "insufficient role"));
    }
    let controller = LeadController::new(state.pool.clone());
    // el lead queda asignado al usuario que lo crea
    let response = controller.create(request, user.user_id).await?;
    Ok(Json(response))
}

async fn list_leads(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Query(filters): Query<LeadFilters>,
) -> Result<Json<Vec<LeadResponse>>, AppError> {
    if !authorization_service::can_access_leads(user.role) {
        return Err(forbidden_error("view leads", "insufficient role"));
    }
    let controller = LeadController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_lead(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LeadResponse>, AppError> {
    if !authorization_service::can_access_leads(user.role) {
        return Err(forbidden_error("view leads", "insufficient role"));
    }
    let controller = LeadController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_lead(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLeadRequest>,
) -> Result<Json<ApiResponse<LeadResponse>>, AppError> {
    if !authorization_service::can_access_leads(user.role) {
        return Err(forbidden_error("manage leads", "insufficient role"));
    }
    let controller = LeadController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_lead(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    // borrar leads es cosa de admin/manager
    if !authorization_service::can_delete_lead(user.role) {
        return Err(forbidden_error("delete leads", "admin or manager role required"));
    }
    let controller = LeadController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Lead deleted successfully"
    })))
}

async fn convert_lead(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ConvertLeadResponse>>, AppError> {
    if !authorization_service::can_access_leads(user.role) {
        return Err(forbidden_error("convert leads", "insufficient role"));
    }
    let controller = LeadController::new(state.pool.clone());
    let response = controller.convert(id, user.user_id).await?;
    Ok(Json(response))
}
