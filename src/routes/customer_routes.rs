use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::customer_controller::CustomerController;
use crate::dto::common::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::services::authorization_service;
use crate::state::AppState;
use crate::utils::errors::{forbidden_error, AppError};

#[derive(Debug, Deserialize)]
struct Pagination {
    limit: Option<i64>,
    offset: Option<i64>,
}

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
}

async fn create_customer(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    if !authorization_service::can_access_customers(user.role) {
        return Err(forbidden_error("manage customers", "insufficient role"));
    }
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    if !authorization_service::can_access_customers(user.role) {
        return Err(forbidden_error("view customers", "insufficient role"));
    }
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list(pagination.limit, pagination.offset).await?;
    Ok(Json(response))
}

async fn get_customer(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    if !authorization_service::can_access_customers(user.role) {
        return Err(forbidden_error("view customers", "insufficient role"));
    }
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_customer(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    if !authorization_service::can_access_customers(user.role) {
        return Err(forbidden_error("manage customers", "insufficient role"));
    }
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
