mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::auth::auth_middleware;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Dealership Operations Tracker");
    info!("================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    let config = EnvironmentConfig::default();
    let app_state = AppState::new(pool, config);

    // Rutas protegidas: identidad resuelta por el middleware JWT
    let api = Router::new()
        .nest("/lead", routes::lead_routes::create_lead_router())
        .nest("/sale", routes::sale_routes::create_sale_router())
        .nest("/customer", routes::customer_routes::create_customer_router())
        .nest("/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/trade-in", routes::trade_in_routes::create_trade_in_router())
        .layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", api)
        .layer(cors_middleware())
        .with_state(app_state.clone());

    // Puerto del servidor
    let addr: SocketAddr = app_state.config.server_url().parse()?;

    info!("🌐 Server starting at http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET  /health - Health check");
    info!("📋 Leads:");
    info!("   POST /api/lead - Create lead (auto-assigned to creator)");
    info!("   GET  /api/lead - List leads");
    info!("   GET  /api/lead/:id - Get lead");
    info!("   PUT  /api/lead/:id - Update lead");
    info!("   DELETE /api/lead/:id - Delete lead (admin/manager)");
    info!("   POST /api/lead/:id/convert - Convert lead to customer + sale");
    info!("💰 Sales:");
    info!("   POST /api/sale - Create sale (reserves the vehicle)");
    info!("   GET  /api/sale - List sales");
    info!("   GET  /api/sale/:id - Get sale");
    info!("   PUT  /api/sale/:id/status - Advance sale status");
    info!("   DELETE /api/sale/:id - Delete sale (releases the vehicle)");
    info!("   GET  /api/sale/commissions/:salesperson_id - Commission summary");
    info!("👤 Customers:");
    info!("   POST /api/customer - Create customer");
    info!("   GET  /api/customer - List customers");
    info!("   GET  /api/customer/:id - Get customer");
    info!("   PUT  /api/customer/:id - Update customer");
    info!("🚙 Vehicles:");
    info!("   POST /api/vehicle - Create vehicle");
    info!("   GET  /api/vehicle - List vehicles");
    info!("   GET  /api/vehicle/:id - Get vehicle");
    info!("   PUT  /api/vehicle/:id - Update vehicle (never touches status)");
    info!("   DELETE /api/vehicle/:id - Delete vehicle");
    info!("🔄 Trade-ins:");
    info!("   POST /api/trade-in - Record trade-in appraisal");
    info!("   GET  /api/trade-in - List trade-ins");
    info!("   GET  /api/trade-in/:id - Get trade-in");
    info!("   PUT  /api/trade-in/:id - Update trade-in");
    info!("   DELETE /api/trade-in/:id - Delete trade-in");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dealership-ops",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
