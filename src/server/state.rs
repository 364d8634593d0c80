//! Server state and configuration.

use crate::printer::PrinterConfig;
use crate::ticket::LayoutConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen_addr: String,
    /// Network location of the physical printer
    pub printer: PrinterConfig,
    /// Layout profile for composed tickets
    pub layout: LayoutConfig,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
