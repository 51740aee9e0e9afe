//! Modelo de Sale
//!
//! Una venta referencia a un cliente, opcionalmente a un vehículo y al
//! vendedor que la creó. Invariante: mientras la venta exista, el vehículo
//! vinculado está `reserved` o `sold`, nunca `available`. La creación y el
//! borrado pasan siempre por el coordinador transaccional.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la venta - mapea al ENUM sale_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sale_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pending,
    Financing,
    Approved,
    Delivered,
    Completed,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Financing => "financing",
            SaleStatus::Approved => "approved",
            SaleStatus::Delivered => "delivered",
            SaleStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(SaleStatus::Pending),
            "financing" => Some(SaleStatus::Financing),
            "approved" => Some(SaleStatus::Approved),
            "delivered" => Some(SaleStatus::Delivered),
            "completed" => Some(SaleStatus::Completed),
            _ => None,
        }
    }

    /// Al entregar o completar la venta, el vehículo vinculado pasa a `sold`.
    pub fn seals_vehicle(&self) -> bool {
        matches!(self, SaleStatus::Delivered | SaleStatus::Completed)
    }
}

/// Sale principal - mapea exactamente a la tabla sales
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub salesperson_id: Option<Uuid>,
    pub sale_price: Decimal,
    pub financing_type: String,
    pub trade_in_value: Option<Decimal>,
    pub warranty_package: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub status: SaleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_vocabulary() {
        for s in ["pending", "financing", "approved", "delivered", "completed"] {
            assert!(SaleStatus::from_str(s).is_some());
        }
        assert!(SaleStatus::from_str("cancelled").is_none());
        assert_eq!(SaleStatus::from_str("PENDING"), Some(SaleStatus::Pending));
    }

    #[test]
    fn test_seals_vehicle() {
        assert!(SaleStatus::Delivered.seals_vehicle());
        assert!(SaleStatus::Completed.seals_vehicle());
        assert!(!SaleStatus::Pending.seals_vehicle());
        assert!(!SaleStatus::Financing.seals_vehicle());
        assert!(!SaleStatus::Approved.seals_vehicle());
    }
}
