//! Unidad de trabajo transaccional
//!
//! Las operaciones multi-entidad del coordinador de ventas pasan por
//! `with_transaction`: el closure recibe la transacción abierta, un `Ok`
//! confirma todos los pasos y cualquier `Err` revierte la unidad completa.
//! Los callers nunca manejan commit/rollback directamente, y la conexión
//! vuelve al pool en todos los caminos de salida.

use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::warn;

use crate::utils::errors::{AppError, AppResult};

/// Transacción de PostgreSQL abierta sobre el pool
pub type PgTx = Transaction<'static, Postgres>;

/// Ejecutar un closure dentro de una transacción
///
/// Commit si el closure devuelve `Ok`, rollback si devuelve `Err`. Un fallo
/// de infraestructura al abrir o confirmar se reporta como
/// `AppError::Transaction`.
pub async fn with_transaction<T, F>(pool: &PgPool, op: F) -> AppResult<T>
where
    F: for<'t> FnOnce(&'t mut PgTx) -> BoxFuture<'t, AppResult<T>>,
{
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::Transaction(format!("failed to begin transaction: {}", e)))?;

    match op(&mut tx).await {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| AppError::Transaction(format!("failed to commit: {}", e)))?;
            Ok(value)
        }
        Err(err) => {
            // el drop también revierte, pero el rollback explícito reporta fallos
            if let Err(rollback_err) = tx.rollback().await {
                warn!("rollback failed after {}: {}", err, rollback_err);
            }
            Err(err)
        }
    }
}
