use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "crate::utils::validation::validate_vin")]
    pub vin: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: i32,

    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_price")]
    pub price: Decimal,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
}

// Request para actualizar un vehículo.
//
// No incluye `status`: la disponibilidad la gestiona exclusivamente el
// coordinador de ventas.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_price")]
    pub price: Option<Decimal>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
}

// Filtros para búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub make: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub price: Decimal,
    pub mileage: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vin: vehicle.vin,
            year: vehicle.year,
            make: vehicle.make,
            model: vehicle.model,
            color: vehicle.color,
            price: vehicle.price,
            mileage: vehicle.mileage,
            status: vehicle.status.as_str().to_string(),
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
