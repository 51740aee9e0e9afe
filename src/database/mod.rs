//! Módulo de base de datos
//!
//! Maneja la conexión y las unidades de trabajo transaccionales
//! con PostgreSQL.

pub mod connection;
pub mod transaction;

pub use connection::create_pool;
pub use transaction::{with_transaction, PgTx};
