//! Coordinador transaccional de ventas
//!
//! Las tres operaciones que mutan varias entidades a la vez (crear venta,
//! borrar venta, convertir lead) viven aquí. Cada una se ejecuta dentro de
//! una única transacción: o confirman todos los pasos o no confirma ninguno,
//! y un lector concurrente nunca observa una venta sin su reserva de
//! vehículo ni una reserva sin su venta.
//!
//! La columna `status` de vehicles solo se escribe desde este módulo.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::database::{with_transaction, PgTx};
use crate::dto::lead_dto::ConvertLeadResponse;
use crate::dto::sale_dto::CreateSaleRequest;
use crate::models::lead::LeadStatus;
use crate::models::sale::{Sale, SaleStatus};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::lead_repository::LeadRepository;
use crate::repositories::sale_repository::SaleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};

pub struct SaleTransactionService {
    pool: PgPool,
}

impl SaleTransactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una venta reservando su vehículo en la misma transacción.
    ///
    /// Secuencia: bloquear la fila del vehículo, insertar la venta en
    /// `pending`, aplicar la transición `available → reserved` y persistirla.
    /// Si el vehículo no está disponible la transición falla con `Conflict`
    /// y el insert se revierte: nunca queda una venta huérfana contra un
    /// vehículo no disponible.
    ///
    /// El `FOR UPDATE` sobre el vehículo serializa dos `create_sale`
    /// concurrentes sobre la misma unidad: el segundo observa el estado
    /// `reserved` ya confirmado y recibe `Conflict`.
    pub async fn create_sale(
        &self,
        request: CreateSaleRequest,
        acting_user: Uuid,
    ) -> AppResult<Sale> {
        // validación previa: sin transacción abierta
        if request.sale_price <= Decimal::ZERO {
            return Err(validation_error("sale_price", "must be a positive amount"));
        }

        let financing_type = request
            .financing_type
            .clone()
            .unwrap_or_else(|| "cash".to_string());

        let customer_id = request.customer_id;
        let vehicle_id = request.vehicle_id;

        let sale = with_transaction(&self.pool, move |tx: &mut PgTx| {
            Box::pin(async move {
                if !CustomerRepository::exists_tx(tx, customer_id).await? {
                    return Err(not_found_error("Customer", &customer_id.to_string()));
                }

                let vehicle = VehicleRepository::find_for_update(tx, vehicle_id)
                    .await?
                    .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

                let sale = SaleRepository::insert(
                    tx,
                    customer_id,
                    Some(vehicle_id),
                    Some(acting_user),
                    request.sale_price,
                    financing_type,
                    request.trade_in_value,
                    request.warranty_package,
                    request.delivery_date,
                )
                .await?;

                let reserved = vehicle.status.reserve()?;
                VehicleRepository::set_status(tx, vehicle.id, reserved).await?;

                Ok(sale)
            })
        })
        .await?;

        info!(
            "sale {} created: vehicle {} reserved for customer {}",
            sale.id, vehicle_id, customer_id
        );

        Ok(sale)
    }

    /// Borrar una venta liberando su vehículo en la misma transacción.
    ///
    /// La liberación es incondicional: aunque la venta hubiera llegado a
    /// `delivered`/`completed` y el vehículo estuviera `sold`, borrar la
    /// venta lo devuelve a `available`. Un segundo borrado del mismo id
    /// recibe `NotFound` sin re-aplicar la liberación.
    pub async fn delete_sale(&self, sale_id: Uuid) -> AppResult<()> {
        with_transaction(&self.pool, move |tx: &mut PgTx| {
            Box::pin(async move {
                let sale = SaleRepository::find_for_update(tx, sale_id)
                    .await?
                    .ok_or_else(|| not_found_error("Sale", &sale_id.to_string()))?;

                SaleRepository::delete_tx(tx, sale.id).await?;

                if let Some(vehicle_id) = sale.vehicle_id {
                    if let Some(vehicle) =
                        VehicleRepository::find_for_update(tx, vehicle_id).await?
                    {
                        VehicleRepository::set_status(tx, vehicle.id, vehicle.status.release())
                            .await?;
                    }
                }

                Ok(())
            })
        })
        .await?;

        info!("sale {} deleted, linked vehicle released", sale_id);

        Ok(())
    }

    /// Convertir un lead en cliente + venta pendiente, en una transacción.
    ///
    /// Orden estricto: leer el lead (con lock de fila), insertar el cliente
    /// con referencia al lead, insertar la venta `pending` sin vehículo
    /// (la asignación de vehículo llega después por la vía normal de venta)
    /// y marcar el lead como `won`. Cualquier fallo intermedio revierte los
    /// cuatro pasos.
    ///
    /// Convertir un lead ya ganado falla con `Conflict`: repetir la
    /// conversión duplicaría el par cliente/venta.
    pub async fn convert_lead(
        &self,
        lead_id: Uuid,
        acting_user: Uuid,
    ) -> AppResult<ConvertLeadResponse> {
        let response = with_transaction(&self.pool, move |tx: &mut PgTx| {
            Box::pin(async move {
                let lead = LeadRepository::find_for_update(tx, lead_id)
                    .await?
                    .ok_or_else(|| not_found_error("Lead", &lead_id.to_string()))?;

                if lead.status == LeadStatus::Won {
                    return Err(AppError::Conflict(
                        "lead has already been converted".to_string(),
                    ));
                }

                let customer = CustomerRepository::insert_from_lead(tx, &lead).await?;

                let sale = SaleRepository::insert(
                    tx,
                    customer.id,
                    None,
                    Some(acting_user),
                    lead.estimated_value.unwrap_or(Decimal::ZERO),
                    "cash".to_string(),
                    None,
                    None,
                    None,
                )
                .await?;

                LeadRepository::set_status(tx, lead.id, LeadStatus::Won).await?;

                Ok(ConvertLeadResponse {
                    customer_id: customer.id,
                    sale_id: sale.id,
                })
            })
        })
        .await?;

        info!(
            "lead {} converted: customer {} / sale {}",
            lead_id, response.customer_id, response.sale_id
        );

        Ok(response)
    }

    /// Avanzar el estado de una venta.
    ///
    /// Al entrar en `delivered`/`completed` el vehículo vinculado pasa de
    /// `reserved` a `sold` dentro de la misma transacción.
    pub async fn update_sale_status(
        &self,
        sale_id: Uuid,
        new_status: SaleStatus,
    ) -> AppResult<Sale> {
        with_transaction(&self.pool, move |tx: &mut PgTx| {
            Box::pin(async move {
                let sale = SaleRepository::find_for_update(tx, sale_id)
                    .await?
                    .ok_or_else(|| not_found_error("Sale", &sale_id.to_string()))?;

                if new_status.seals_vehicle() && !sale.status.seals_vehicle() {
                    if let Some(vehicle_id) = sale.vehicle_id {
                        let vehicle = VehicleRepository::find_for_update(tx, vehicle_id)
                            .await?
                            .ok_or_else(|| {
                                not_found_error("Vehicle", &vehicle_id.to_string())
                            })?;

                        let sold = vehicle.status.mark_sold()?;
                        VehicleRepository::set_status(tx, vehicle_id, sold).await?;
                    }
                }

                SaleRepository::set_status(tx, sale.id, new_status).await
            })
        })
        .await
    }
}
