use crate::database::PgTx;
use crate::models::sale::{Sale, SaleStatus};
use crate::utils::errors::AppResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    pub async fn list(
        &self,
        status: Option<SaleStatus>,
        customer_id: Option<Uuid>,
        salesperson_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT * FROM sales
            WHERE ($1::sale_status IS NULL OR status = $1)
            AND ($2::uuid IS NULL OR customer_id = $2)
            AND ($3::uuid IS NULL OR salesperson_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(status)
        .bind(customer_id)
        .bind(salesperson_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Ventas completadas de un vendedor, para el cálculo de comisiones.
    pub async fn completed_by_salesperson(&self, salesperson_id: Uuid) -> AppResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            "SELECT * FROM sales WHERE salesperson_id = $1 AND status = $2 ORDER BY created_at",
        )
        .bind(salesperson_id)
        .bind(SaleStatus::Completed)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Insertar la venta dentro de una transacción del coordinador.
    ///
    /// Toda venta nace `pending`; el vendedor es el usuario que ejecuta la
    /// operación.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        tx: &mut PgTx,
        customer_id: Uuid,
        vehicle_id: Option<Uuid>,
        salesperson_id: Option<Uuid>,
        sale_price: Decimal,
        financing_type: String,
        trade_in_value: Option<Decimal>,
        warranty_package: Option<String>,
        delivery_date: Option<NaiveDate>,
    ) -> AppResult<Sale> {
        let id = Uuid::new_v4();

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (id, customer_id, vehicle_id, salesperson_id, sale_price, financing_type, trade_in_value, warranty_package, delivery_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .bind(vehicle_id)
        .bind(salesperson_id)
        .bind(sale_price)
        .bind(financing_type)
        .bind(trade_in_value)
        .bind(warranty_package)
        .bind(delivery_date)
        .bind(SaleStatus::Pending)
        .fetch_one(&mut **tx)
        .await?;

        Ok(sale)
    }

    /// Leer la venta bloqueando su fila dentro de la transacción.
    pub async fn find_for_update(tx: &mut PgTx, id: Uuid) -> AppResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(sale)
    }

    /// Borrar la venta dentro de la transacción.
    pub async fn delete_tx(tx: &mut PgTx, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sales WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Avanzar el estado de la venta dentro de la transacción.
    pub async fn set_status(tx: &mut PgTx, id: Uuid, status: SaleStatus) -> AppResult<Sale> {
        let sale = sqlx::query_as::<_, Sale>(
            "UPDATE sales SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(sale)
    }
}
