use crate::database::PgTx;
use crate::models::customer::Customer;
use crate::models::lead::Lead;
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: String,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let id = Uuid::new_v4();

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, name, email, phone, address, lead_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NULL, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                address = COALESCE($5, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Comprobar la existencia del cliente dentro de una transacción.
    pub async fn exists_tx(tx: &mut PgTx, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut **tx)
                .await?;

        Ok(result.0)
    }

    /// Crear el cliente a partir de los datos de contacto de un lead,
    /// conservando la referencia al lead de origen. Solo se invoca desde la
    /// conversión atómica del coordinador.
    pub async fn insert_from_lead(tx: &mut PgTx, lead: &Lead) -> AppResult<Customer> {
        let id = Uuid::new_v4();

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, name, email, phone, address, lead_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL, $5, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(lead.id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(customer)
    }
}
