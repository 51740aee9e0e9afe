//! DTOs de la API
//!
//! Requests, responses y filtros que entran y salen por HTTP.

pub mod common;
pub mod customer_dto;
pub mod lead_dto;
pub mod sale_dto;
pub mod trade_in_dto;
pub mod vehicle_dto;
