//! Repositorios de acceso a datos
//!
//! Queries parametrizadas sobre PostgreSQL. Los métodos que reciben una
//! transacción (`&mut PgTx`) solo se invocan desde el coordinador de ventas.

pub mod customer_repository;
pub mod lead_repository;
pub mod sale_repository;
pub mod trade_in_repository;
pub mod vehicle_repository;
