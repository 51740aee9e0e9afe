use crate::models::trade_in::TradeIn;
use crate::utils::errors::AppResult;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TradeInRepository {
    pool: PgPool,
}

impl TradeInRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        customer_id: Option<Uuid>,
        vin: Option<String>,
        make: String,
        model: String,
        year: i32,
        mileage: i32,
        condition: String,
        appraised_value: Option<Decimal>,
    ) -> AppResult<TradeIn> {
        let id = Uuid::new_v4();

        let trade_in = sqlx::query_as::<_, TradeIn>(
            r#"
            INSERT INTO trade_ins (id, customer_id, vin, make, model, year, mileage, condition, appraised_value, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .bind(vin)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(mileage)
        .bind(condition)
        .bind(appraised_value)
        .fetch_one(&self.pool)
        .await?;

        Ok(trade_in)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TradeIn>> {
        let trade_in = sqlx::query_as::<_, TradeIn>("SELECT * FROM trade_ins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trade_in)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<TradeIn>> {
        let trade_ins = sqlx::query_as::<_, TradeIn>(
            "SELECT * FROM trade_ins ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(trade_ins)
    }

    pub async fn update(
        &self,
        id: Uuid,
        mileage: Option<i32>,
        condition: Option<String>,
        appraised_value: Option<Decimal>,
    ) -> AppResult<Option<TradeIn>> {
        let trade_in = sqlx::query_as::<_, TradeIn>(
            r#"
            UPDATE trade_ins SET
                mileage = COALESCE($2, mileage),
                condition = COALESCE($3, condition),
                appraised_value = COALESCE($4, appraised_value)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(mileage)
        .bind(condition)
        .bind(appraised_value)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trade_in)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM trade_ins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
