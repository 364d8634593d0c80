//! # HTTP Server for Ticket Printing
//!
//! The HTTP boundary the point-of-sale frontend talks to. Routes:
//!
//! | Method | Path                   | Purpose                         |
//! |--------|------------------------|---------------------------------|
//! | POST   | `/imprimir`            | Compose and print an order      |
//! | GET    | `/impresora/test`      | Connection check                |
//! | GET    | `/impresora/test-print`| Print the diagnostic ticket     |
//!
//! All responses are `{ok: bool, message: string}`; CORS is permissive
//! because the frontend is served from a different origin on the LAN.
//!
//! ## Usage
//!
//! ```bash
//! comanda serve --listen 0.0.0.0:3000
//! ```

mod handlers;
mod state;

pub use state::ServerConfig;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::error::ComandaError;
use state::AppState;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use comanda::printer::PrinterConfig;
/// use comanda::server::{ServerConfig, serve};
/// use comanda::ticket::LayoutConfig;
///
/// # async fn example() -> Result<(), comanda::error::ComandaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3000".to_string(),
///     printer: PrinterConfig::from_env(),
///     layout: LayoutConfig::MOSTRADOR,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ComandaError> {
    let listen_addr = config.listen_addr.clone();
    let app_state = Arc::new(AppState::new(config));

    info!(
        listen = %listen_addr,
        printer = %app_state.config.printer.addr(),
        layout = app_state.config.layout.name,
        "comanda server starting"
    );

    let app = Router::new()
        .route("/imprimir", post(handlers::imprimir))
        .route("/impresora/test", get(handlers::test))
        .route("/impresora/test-print", get(handlers::test_print))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| {
            ComandaError::Connection(format!("Failed to bind to {}: {}", listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ComandaError::Connection(format!("Server error: {}", e)))?;

    Ok(())
}
