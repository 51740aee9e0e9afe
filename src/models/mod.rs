//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod customer;
pub mod lead;
pub mod sale;
pub mod trade_in;
pub mod user;
pub mod vehicle;
