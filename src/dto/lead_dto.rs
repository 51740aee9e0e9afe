use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::lead::Lead;

// Request para crear un lead
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 2, max = 50))]
    pub source: String,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(custom = "crate::utils::validation::validate_email")]
    pub email: String,

    #[validate(length(max = 200))]
    pub vehicle_interest: Option<String>,

    pub estimated_value: Option<Decimal>,

    pub follow_up_date: Option<NaiveDate>,
}

// Request para actualizar un lead
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLeadRequest {
    #[validate(length(min = 2, max = 50))]
    pub source: Option<String>,

    // vocabulario cerrado, se parsea en el controller
    pub status: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_email")]
    pub email: Option<String>,

    #[validate(length(max = 200))]
    pub vehicle_interest: Option<String>,

    pub assigned_to: Option<Uuid>,

    pub estimated_value: Option<Decimal>,

    pub follow_up_date: Option<NaiveDate>,
}

// Filtros para búsqueda de leads
#[derive(Debug, Deserialize)]
pub struct LeadFilters {
    pub status: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de lead
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: Uuid,
    pub source: String,
    pub status: String,
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

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            source: lead.source,
            status: lead.status.as_str().to_string(),
            name: lead.name,
            phone: lead.phone,
            email: lead.email,
            vehicle_interest: lead.vehicle_interest,
            assigned_to: lead.assigned_to,
            estimated_value: lead.estimated_value,
            follow_up_date: lead.follow_up_date,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

// Response de conversión de lead
#[derive(Debug, Serialize)]
pub struct ConvertLeadResponse {
    pub customer_id: Uuid,
    pub sale_id: Uuid,
}
