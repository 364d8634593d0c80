//! # Printer Configuration
//!
//! The printer address is sourced from the environment with fixed
//! defaults, so the service comes up without configuration on the
//! network it was built for and can be repointed without a rebuild.
//!
//! | Variable       | Default         |
//! |----------------|-----------------|
//! | `PRINTER_IP`   | `192.168.1.100` |
//! | `PRINTER_PORT` | `9100`          |

use std::env;

/// Default printer IP address
pub const DEFAULT_IP: &str = "192.168.1.100";

/// Default raw-printing TCP port
pub const DEFAULT_PORT: u16 = 9100;

/// Network location of the physical printer.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Printer IP address or hostname
    pub host: String,
    /// Raw-printing TCP port
    pub port: u16,
}

impl PrinterConfig {
    /// Build from `PRINTER_IP` / `PRINTER_PORT`, falling back to the
    /// defaults. An unparseable port falls back rather than failing:
    /// a misconfigured environment should not keep the service down.
    pub fn from_env() -> Self {
        let host = env::var("PRINTER_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = env::var("PRINTER_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// `host:port` for display and connection.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.host, "192.168.1.100");
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_addr() {
        let config = PrinterConfig {
            host: "10.0.0.7".to_string(),
            port: 9100,
        };
        assert_eq!(config.addr(), "10.0.0.7:9100");
    }
}
