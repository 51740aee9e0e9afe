use crate::database::PgTx;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppResult;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vin: String,
        year: i32,
        make: String,
        model: String,
        color: Option<String>,
        price: Decimal,
        mileage: i32,
    ) -> AppResult<Vehicle> {
        let id = Uuid::new_v4();

        // los vehículos nuevos entran al inventario como disponibles
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, vin, year, make, model, color, price, mileage, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vin)
        .bind(year)
        .bind(make)
        .bind(model)
        .bind(color)
        .bind(price)
        .bind(mileage)
        .bind(VehicleStatus::Available)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn vin_exists(&self, vin: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1)")
                .bind(vin)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(
        &self,
        status: Option<VehicleStatus>,
        make: Option<String>,
        year_from: Option<i32>,
        year_to: Option<i32>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::vehicle_status IS NULL OR status = $1)
            AND ($2::text IS NULL OR make ILIKE $2)
            AND ($3::int IS NULL OR year >= $3)
            AND ($4::int IS NULL OR year <= $4)
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(status)
        .bind(make)
        .bind(year_from)
        .bind(year_to)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Actualización genérica del vehículo.
    ///
    /// La columna `status` no se toca aquí: la disponibilidad la muta
    /// exclusivamente el coordinador de ventas dentro de sus transacciones.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        year: Option<i32>,
        make: Option<String>,
        model: Option<String>,
        color: Option<String>,
        price: Option<Decimal>,
        mileage: Option<i32>,
    ) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles SET
                year = COALESCE($2, year),
                make = COALESCE($3, make),
                model = COALESCE($4, model),
                color = COALESCE($5, color),
                price = COALESCE($6, price),
                mileage = COALESCE($7, mileage),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(year)
        .bind(make)
        .bind(model)
        .bind(color)
        .bind(price)
        .bind(mileage)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Leer el vehículo bloqueando su fila dentro de la transacción.
    ///
    /// El `FOR UPDATE` serializa las reservas concurrentes sobre la misma
    /// unidad: la segunda transacción espera el commit de la primera y ve
    /// el estado `reserved` ya confirmado.
    pub async fn find_for_update(tx: &mut PgTx, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        Ok(vehicle)
    }

    /// Escribir el estado de disponibilidad dentro de la transacción.
    pub async fn set_status(tx: &mut PgTx, id: Uuid, status: VehicleStatus) -> AppResult<()> {
        sqlx::query("UPDATE vehicles SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
