use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::sale::Sale;
use crate::services::commission_service::CommissionTier;

// Request para crear una venta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSaleRequest {
    pub customer_id: Uuid,

    pub vehicle_id: Uuid,

    #[validate(custom = "crate::utils::validation::validate_price")]
    pub sale_price: Decimal,

    #[validate(length(min = 2, max = 50))]
    pub financing_type: Option<String>,

    pub trade_in_value: Option<Decimal>,

    #[validate(length(min = 2, max = 100))]
    pub warranty_package: Option<String>,

    pub delivery_date: Option<NaiveDate>,
}

// Request para avanzar el estado de una venta
#[derive(Debug, Deserialize)]
pub struct UpdateSaleStatusRequest {
    pub status: String,
}

// Filtros para búsqueda de ventas
#[derive(Debug, Deserialize)]
pub struct SaleFilters {
    pub status: Option<String>,
    pub customer_id: Option<Uuid>,
    pub salesperson_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de venta
#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub salesperson_id: Option<Uuid>,
    pub sale_price: Decimal,
    pub financing_type: String,
    pub trade_in_value: Option<Decimal>,
    pub warranty_package: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            customer_id: sale.customer_id,
            vehicle_id: sale.vehicle_id,
            salesperson_id: sale.salesperson_id,
            sale_price: sale.sale_price,
            financing_type: sale.financing_type,
            trade_in_value: sale.trade_in_value,
            warranty_package: sale.warranty_package,
            delivery_date: sale.delivery_date,
            status: sale.status.as_str().to_string(),
            created_at: sale.created_at,
            updated_at: sale.updated_at,
        }
    }
}

// Resumen de comisiones de un vendedor
#[derive(Debug, Serialize)]
pub struct CommissionSummaryResponse {
    pub salesperson_id: Uuid,
    pub sale_count: usize,
    pub total_sales: Decimal,
    pub total_commission: Decimal,
    pub formatted_commission: String,
    pub tier: CommissionTier,
}
