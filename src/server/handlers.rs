//! Print and diagnostics handlers.
//!
//! Every failure is mapped to the `{ok, message}` JSON shape the
//! frontend expects; messages are the user-visible Spanish strings the
//! counter staff already know.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::ComandaError;
use crate::order::Order;
use crate::printer::PrinterConfig;
use crate::ticket::{compose, test_sequence};
use crate::transport::NetworkTransport;

use super::state::AppState;

/// Response body for all printing endpoints.
#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub ok: bool,
    pub message: String,
}

/// Handle POST /imprimir - compose and print an order ticket.
pub async fn imprimir(State(state): State<Arc<AppState>>, Json(order): Json<Order>) -> Response {
    info!(
        client = order.client.as_deref().unwrap_or(""),
        items = order.items.len(),
        delivery = order.is_delivery,
        "pedido recibido"
    );

    if order.validate().is_err() {
        return reply(StatusCode::BAD_REQUEST, false, "Pedido inválido");
    }

    let data = compose(&order, &state.config.layout).to_bytes();
    match transmit(state.config.printer.clone(), data).await {
        Ok(()) => reply(StatusCode::OK, true, "Impresión exitosa"),
        Err(ComandaError::Connection(e)) => {
            error!(error = %e, "printer unreachable");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                "No se pudo conectar con la impresora",
            )
        }
        Err(e) => {
            error!(error = %e, "print failed");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                "Error durante la impresión",
            )
        }
    }
}

/// Handle GET /impresora/test - connection check, nothing printed.
pub async fn test(State(state): State<Arc<AppState>>) -> Response {
    let printer = state.config.printer.clone();
    let online = tokio::task::spawn_blocking(move || {
        NetworkTransport::probe(&printer.host, printer.port)
    })
    .await
    .unwrap_or(false);

    if online {
        reply(StatusCode::OK, true, "Impresora ONLINE")
    } else {
        reply(StatusCode::INTERNAL_SERVER_ERROR, false, "Impresora OFFLINE")
    }
}

/// Handle GET /impresora/test-print - print the fixed diagnostic ticket.
pub async fn test_print(State(state): State<Arc<AppState>>) -> Response {
    let data = test_sequence().to_bytes();
    match transmit(state.config.printer.clone(), data).await {
        Ok(()) => reply(StatusCode::OK, true, "Impresora OK"),
        Err(ComandaError::Connection(e)) => {
            error!(error = %e, "printer unreachable");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                "No se pudo conectar con la impresora",
            )
        }
        Err(e) => {
            error!(error = %e, "test print failed");
            reply(StatusCode::INTERNAL_SERVER_ERROR, false, "Error al imprimir")
        }
    }
}

/// Open, send, close — one connection per job, off the async runtime.
async fn transmit(printer: PrinterConfig, data: Vec<u8>) -> Result<(), ComandaError> {
    tokio::task::spawn_blocking(move || {
        let mut transport = NetworkTransport::open(&printer.host, printer.port)?;
        transport.send(&data)?;
        transport.close();
        Ok(())
    })
    .await
    .map_err(|e| ComandaError::Transmission(format!("task error: {}", e)))?
}

fn reply(status: StatusCode, ok: bool, message: &str) -> Response {
    (
        status,
        Json(PrintResponse {
            ok,
            message: message.to_string(),
        }),
    )
        .into_response()
}
