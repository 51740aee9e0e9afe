use crate::dto::common::ApiResponse;
use crate::dto::trade_in_dto::{CreateTradeInRequest, TradeInResponse, UpdateTradeInRequest};
use crate::repositories::trade_in_repository::TradeInRepository;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct TradeInController {
    repository: TradeInRepository,
}

impl TradeInController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TradeInRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTradeInRequest,
    ) -> AppResult<ApiResponse<TradeInResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let trade_in = self
            .repository
            .create(
                request.customer_id,
                request.vin,
                request.make,
                request.model,
                request.year,
                request.mileage,
                request.condition,
                request.appraised_value,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TradeInResponse::from(trade_in),
            "Trade-in recorded successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TradeInResponse> {
        let trade_in = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trade-in not found".to_string()))?;

        Ok(TradeInResponse::from(trade_in))
    }

    pub async fn list(&self, limit: Option<i64>, offset: Option<i64>) -> AppResult<Vec<TradeInResponse>> {
        let limit = limit.unwrap_or(50).min(100);
        let offset = offset.unwrap_or(0);

        let trade_ins = self.repository.list(limit, offset).await?;

        Ok(trade_ins.into_iter().map(TradeInResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTradeInRequest,
    ) -> AppResult<ApiResponse<TradeInResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let trade_in = self
            .repository
            .update(id, request.mileage, request.condition, request.appraised_value)
            .await?
            .ok_or_else(|| AppError::NotFound("Trade-in not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            TradeInResponse::from(trade_in),
            "Trade-in updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Trade-in not found".to_string()));
        }
        Ok(())
    }
}
