use crate::dto::common::ApiResponse;
use crate::dto::sale_dto::{
    CommissionSummaryResponse, CreateSaleRequest, SaleFilters, SaleResponse,
    UpdateSaleStatusRequest,
};
use crate::models::sale::SaleStatus;
use crate::repositories::sale_repository::SaleRepository;
use crate::services::commission_service;
use crate::services::sale_transaction_service::SaleTransactionService;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct SaleController {
    repository: SaleRepository,
    transactions: SaleTransactionService,
}

impl SaleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SaleRepository::new(pool.clone()),
            transactions: SaleTransactionService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateSaleRequest,
        acting_user: Uuid,
    ) -> AppResult<ApiResponse<SaleResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let sale = self.transactions.create_sale(request, acting_user).await?;

        Ok(ApiResponse::success_with_message(
            SaleResponse::from(sale),
            "Sale created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<SaleResponse> {
        let sale = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

        Ok(SaleResponse::from(sale))
    }

    pub async fn list(&self, filters: SaleFilters) -> AppResult<Vec<SaleResponse>> {
        let status = match filters.status.as_deref() {
            Some(s) => Some(SaleStatus::from_str(s).ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a valid sale status", s))
            })?),
            None => None,
        };

        let limit = filters.limit.unwrap_or(50).min(100);
        let offset = filters.offset.unwrap_or(0);

        let sales = self
            .repository
            .list(
                status,
                filters.customer_id,
                filters.salesperson_id,
                limit,
                offset,
            )
            .await?;

        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateSaleStatusRequest,
    ) -> AppResult<ApiResponse<SaleResponse>> {
        let status = SaleStatus::from_str(&request.status).ok_or_else(|| {
            AppError::InvalidInput(format!("'{}' is not a valid sale status", request.status))
        })?;

        let sale = self.transactions.update_sale_status(id, status).await?;

        Ok(ApiResponse::success_with_message(
            SaleResponse::from(sale),
            "Sale status updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.transactions.delete_sale(id).await
    }

    /// Resumen de comisiones de un vendedor sobre sus ventas completadas.
    ///
    /// Lectura pura sobre registros ya confirmados: no abre transacción.
    pub async fn commissions(&self, salesperson_id: Uuid) -> AppResult<CommissionSummaryResponse> {
        let sales = self
            .repository
            .completed_by_salesperson(salesperson_id)
            .await?;

        let total_sales = commission_service::total_sales_volume(&sales);
        let total_commission = commission_service::total_commission(&sales);

        Ok(CommissionSummaryResponse {
            salesperson_id,
            sale_count: sales.len(),
            total_sales,
            total_commission,
            formatted_commission: commission_service::format_commission(total_commission),
            tier: commission_service::commission_tier(total_sales),
        })
    }
}
