pub mod customer_routes;
pub mod lead_routes;
pub mod sale_routes;
pub mod trade_in_routes;
pub mod vehicle_routes;
