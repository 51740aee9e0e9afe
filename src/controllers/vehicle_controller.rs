use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate().map_err(AppError::Validation)?;

        // el VIN es único en el inventario
        if self.repository.vin_exists(&request.vin).await? {
            return Err(AppError::Conflict(format!(
                "vehicle with VIN '{}' already exists",
                request.vin
            )));
        }

        let vehicle = self
            .repository
            .create(
                request.vin,
                request.year,
                request.make,
                request.model,
                request.color,
                request.price,
                request.mileage.unwrap_or(0),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<VehicleResponse>> {
        let status = match filters.status.as_deref() {
            Some(s) => Some(VehicleStatus::from_str(s).ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a valid vehicle status", s))
            })?),
            None => None,
        };

        let limit = filters.limit.unwrap_or(50).min(100);
        let offset = filters.offset.unwrap_or(0);

        let vehicles = self
            .repository
            .list(
                status,
                filters.make,
                filters.year_from,
                filters.year_to,
                limit,
                offset,
            )
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate().map_err(AppError::Validation)?;

        let vehicle = self
            .repository
            .update(
                id,
                request.year,
                request.make,
                request.model,
                request.color,
                request.price,
                request.mileage,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        // un vehículo reservado o vendido pertenece a una venta activa
        if vehicle.status != VehicleStatus::Available {
            return Err(AppError::Conflict(format!(
                "vehicle cannot be deleted while {} (delete the sale first)",
                vehicle.status.as_str()
            )));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
