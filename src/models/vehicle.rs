//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, el enum de disponibilidad y sus
//! transiciones legales. Mapea exactamente al schema PostgreSQL con primary
//! key 'id'.
//!
//! La columna `status` es propiedad exclusiva del coordinador de ventas
//! mientras exista una venta activa contra el vehículo; el endpoint genérico
//! de actualización no la toca nunca.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

/// Estado de disponibilidad - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Reserved,
    Sold,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::Sold => "sold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "available" => Some(VehicleStatus::Available),
            "reserved" => Some(VehicleStatus::Reserved),
            "sold" => Some(VehicleStatus::Sold),
            _ => None,
        }
    }

    /// Transición `available → reserved`.
    ///
    /// Falla con `Conflict` si el vehículo no está disponible; esto es lo que
    /// impide reservar dos veces la misma unidad.
    pub fn reserve(self) -> AppResult<Self> {
        match self {
            VehicleStatus::Available => Ok(VehicleStatus::Reserved),
            other => Err(AppError::Conflict(format!(
                "vehicle is not available (current status: {})",
                other.as_str()
            ))),
        }
    }

    /// Transición `reserved|sold → available`.
    ///
    /// Idempotente: liberar un vehículo ya disponible es un no-op.
    pub fn release(self) -> Self {
        VehicleStatus::Available
    }

    /// Transición `reserved → sold`.
    ///
    /// No existe salto directo `available → sold`; una venta siempre pasa
    /// por la reserva.
    pub fn mark_sold(self) -> AppResult<Self> {
        match self {
            VehicleStatus::Reserved => Ok(VehicleStatus::Sold),
            other => Err(AppError::Conflict(format!(
                "vehicle cannot be marked sold (current status: {})",
                other.as_str()
            ))),
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub price: Decimal,
    pub mileage: i32,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!(VehicleStatus::from_str("AVAILABLE"), Some(VehicleStatus::Available));
        assert_eq!(VehicleStatus::from_str("Reserved"), Some(VehicleStatus::Reserved));
        assert_eq!(VehicleStatus::from_str("sold"), Some(VehicleStatus::Sold));
        assert_eq!(VehicleStatus::from_str("parked"), None);
    }

    #[test]
    fn test_reserve_only_from_available() {
        assert_eq!(VehicleStatus::Available.reserve().unwrap(), VehicleStatus::Reserved);
        assert!(VehicleStatus::Reserved.reserve().is_err());
        assert!(VehicleStatus::Sold.reserve().is_err());
    }

    #[test]
    fn test_release_is_idempotent() {
        assert_eq!(VehicleStatus::Reserved.release(), VehicleStatus::Available);
        assert_eq!(VehicleStatus::Sold.release(), VehicleStatus::Available);
        assert_eq!(VehicleStatus::Available.release(), VehicleStatus::Available);
    }

    #[test]
    fn test_mark_sold_requires_reservation() {
        assert_eq!(VehicleStatus::Reserved.mark_sold().unwrap(), VehicleStatus::Sold);
        // no hay salto directo available → sold
        assert!(VehicleStatus::Available.mark_sold().is_err());
        assert!(VehicleStatus::Sold.mark_sold().is_err());
    }
}
