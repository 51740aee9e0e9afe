use crate::dto::common::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let customer = self
            .repository
            .create(request.name, request.email, request.phone, request.address)
            .await?;

        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Customer created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CustomerResponse> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn list(&self, limit: Option<i64>, offset: Option<i64>) -> AppResult<Vec<CustomerResponse>> {
        let limit = limit.unwrap_or(50).min(100);
        let offset = offset.unwrap_or(0);

        let customers = self.repository.list(limit, offset).await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let customer = self
            .repository
            .update(id, request.name, request.email, request.phone, request.address)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Customer updated successfully".to_string(),
        ))
    }
}
