use crate::database::PgTx;
use crate::models::lead::{Lead, LeadStatus};
use crate::utils::errors::AppResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        source: String,
        name: String,
        phone: String,
        email: String,
        vehicle_interest: Option<String>,
        assigned_to: Uuid,
        estimated_value: Option<Decimal>,
        follow_up_date: Option<NaiveDate>,
    ) -> AppResult<Lead> {
        let id = Uuid::new_v4();

        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (id, source, status, name, phone, email, vehicle_interest, assigned_to, estimated_value, follow_up_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(source)
        .bind(LeadStatus::New)
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(vehicle_interest)
        .bind(assigned_to)
        .bind(estimated_value)
        .bind(follow_up_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Lead>> {
        let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lead)
    }

    pub async fn list(
        &self,
        status: Option<LeadStatus>,
        assigned_to: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Lead>> {
        let leads = sqlx::query_as::<_, Lead>(
            r#"
            SELECT * FROM leads
            WHERE ($1::lead_status IS NULL OR status = $1)
            AND ($2::uuid IS NULL OR assigned_to = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(assigned_to)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        source: Option<String>,
        status: Option<LeadStatus>,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        vehicle_interest: Option<String>,
        assigned_to: Option<Uuid>,
        estimated_value: Option<Decimal>,
        follow_up_date: Option<NaiveDate>,
    ) -> AppResult<Option<Lead>> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads SET
                source = COALESCE($2, source),
                status = COALESCE($3, status),
                name = COALESCE($4, name),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                vehicle_interest = COALESCE($7, vehicle_interest),
                assigned_to = COALESCE($8, assigned_to),
                estimated_value = COALESCE($9, estimated_value),
                follow_up_date = COALESCE($10, follow_up_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(source)
        .bind(status)
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(vehicle_interest)
        .bind(assigned_to)
        .bind(estimated_value)
        .bind(follow_up_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Leer el lead bloqueando su fila dentro de la transacción de conversión.
    ///
    /// El lock impide que dos conversiones concurrentes del mismo lead
    /// generen dos pares cliente/venta.
    pub async fn find_for_update(tx: &mut PgTx, id: Uuid) -> AppResult<Option<Lead>> {
        let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(lead)
    }

    /// Marcar el lead como ganado dentro de la transacción de conversión.
    pub async fn set_status(tx: &mut PgTx, id: Uuid, status: LeadStatus) -> AppResult<()> {
        sqlx::query("UPDATE leads SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
