use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trade_in::TradeIn;

// Request para registrar una tasación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTradeInRequest {
    pub customer_id: Option<Uuid>,

    #[validate(custom = "crate::utils::validation::validate_vin")]
    pub vin: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    #[validate(range(min = 0))]
    pub mileage: i32,

    #[validate(length(min = 2, max = 50))]
    pub condition: String,

    pub appraised_value: Option<Decimal>,
}

// Request para actualizar una tasación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTradeInRequest {
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(length(min = 2, max = 50))]
    pub condition: Option<String>,

    pub appraised_value: Option<Decimal>,
}

// Response de tasación
#[derive(Debug, Serialize)]
pub struct TradeInResponse {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub vin: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub condition: String,
    pub appraised_value: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<TradeIn> for TradeInResponse {
    fn from(trade_in: TradeIn) -> Self {
        Self {
            id: trade_in.id,
            customer_id: trade_in.customer_id,
            vin: trade_in.vin,
            make: trade_in.make,
            model: trade_in.model,
            year: trade_in.year,
            mileage: trade_in.mileage,
            condition: trade_in.condition,
            appraised_value: trade_in.appraised_value,
            created_at: trade_in.created_at,
        }
    }
}
