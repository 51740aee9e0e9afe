//! Modelo de Lead
//!
//! Un lead es una consulta de compra previa a cualquier compromiso. Su
//! estado es un vocabulario cerrado; la transición a `won` la ejecuta
//! únicamente la conversión atómica del coordinador de ventas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del lead - mapea al ENUM lead_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lead_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Negotiating,
    Won,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Negotiating => "negotiating",
            LeadStatus::Won => "won",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "qualified" => Some(LeadStatus::Qualified),
            "negotiating" => Some(LeadStatus::Negotiating),
            "won" => Some(LeadStatus::Won),
            "lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

/// Lead principal - mapea exactamente a la tabla leads
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lead {
    pub id: Uuid,
    pub source: String,
    pub status: LeadStatus,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_interest: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub estimated_value: Option<Decimal>,
    pub follow_up_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_vocabulary() {
        for s in ["new", "contacted", "qualified", "negotiating", "won", "lost"] {
            assert!(LeadStatus::from_str(s).is_some());
        }
        assert!(LeadStatus::from_str("closed").is_none());
    }

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!(LeadStatus::from_str("WON"), Some(LeadStatus::Won));
        assert_eq!(LeadStatus::from_str("Negotiating"), Some(LeadStatus::Negotiating));
    }
}
