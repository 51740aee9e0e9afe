//! Modelo de Trade-in
//!
//! Tasación del vehículo de un cliente. Registro informativo: no está
//! vinculado transaccionalmente a ninguna venta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Trade-in principal - mapea exactamente a la tabla trade_ins
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeIn {
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
