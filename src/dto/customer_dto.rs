use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_email")]
    pub email: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(length(max = 200))]
    pub address: Option<String>,
}

// Request para actualizar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_email")]
    pub email: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub address: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub lead_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            lead_id: customer.lead_id,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}
