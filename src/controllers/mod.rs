//! Controllers del sistema
//!
//! Capa fina entre los handlers HTTP y los repositorios/servicios.

pub mod customer_controller;
pub mod lead_controller;
pub mod sale_controller;
pub mod trade_in_controller;
pub mod vehicle_controller;
