use crate::dto::common::ApiResponse;
use crate::dto::lead_dto::{
    ConvertLeadResponse, CreateLeadRequest, LeadFilters, LeadResponse, UpdateLeadRequest,
};
use crate::models::lead::LeadStatus;
use crate::repositories::lead_repository::LeadRepository;
use crate::services::sale_transaction_service::SaleTransactionService;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct LeadController {
    repository: LeadRepository,
    transactions: SaleTransactionService,
}

impl LeadController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LeadRepository::new(pool.clone()),
            transactions: SaleTransactionService::new(pool),
        }
    }

    /// El lead queda asignado automáticamente al usuario que lo crea.
    pub async fn create(
        &self,
        request: CreateLeadRequest,
        acting_user: Uuid,
    ) -> AppResult<ApiResponse<LeadResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let lead = self
            .repository
            .create(
                request.source,
                request.name,
                request.phone,
                request.email,
                request.vehicle_interest,
                acting_user,
                request.estimated_value,
                request.follow_up_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            LeadResponse::from(lead),
            "Lead created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<LeadResponse> {
        let lead = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

        Ok(LeadResponse::from(lead))
    }

    pub async fn list(&self, filters: LeadFilters) -> AppResult<Vec<LeadResponse>> {
        let status = match filters.status.as_deref() {
            Some(s) => Some(LeadStatus::from_str(s).ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a valid lead status", s))
            })?),
            None => None,
        };

        let limit = filters.limit.unwrap_or(50).min(100);
        let offset = filters.offset.unwrap_or(0);

        let leads = self
            .repository
            .list(status, filters.assigned_to, limit, offset)
            .await?;

        Ok(leads.into_iter().map(LeadResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLeadRequest,
    ) -> AppResult<ApiResponse<LeadResponse>> {
        request.validate().map_err(AppError::Validation)?;

        // el status entrante se valida contra el vocabulario cerrado
        let status = match request.status.as_deref() {
            Some(s) => Some(LeadStatus::from_str(s).ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a valid lead status", s))
            })?),
            None => None,
        };

        // a `won` solo se llega por la conversión atómica
        if status == Some(LeadStatus::Won) {
            return Err(AppError::InvalidInput(
                "leads reach 'won' through conversion only".to_string(),
            ));
        }

        let lead = self
            .repository
            .update(
                id,
                request.source,
                status,
                request.name,
                request.phone,
                request.email,
                request.vehicle_interest,
                request.assigned_to,
                request.estimated_value,
                request.follow_up_date,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            LeadResponse::from(lead),
            "Lead updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Lead not found".to_string()));
        }
        Ok(())
    }

    /// Conversión atómica lead → cliente + venta pendiente.
    pub async fn convert(
        &self,
        id: Uuid,
        acting_user: Uuid,
    ) -> AppResult<ApiResponse<ConvertLeadResponse>> {
        let response = self.transactions.convert_lead(id, acting_user).await?;

        Ok(ApiResponse::success_with_message(
            response,
            "Lead converted successfully".to_string(),
        ))
    }
}
