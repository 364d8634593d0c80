//! # Error Types
//!
//! This module defines error types used throughout the comanda crate.

use thiserror::Error;

/// Main error type for comanda operations
#[derive(Debug, Error)]
pub enum ComandaError {
    /// Order rejected before composition (missing or empty item list)
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Printer unreachable or refused the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failure while sending over an already-open connection
    #[error("Transmission error: {0}")]
    Transmission(String),

    /// Unknown layout profile name
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
