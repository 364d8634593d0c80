//! # Comanda - Kitchen Ticket Printing Service
//!
//! Comanda turns restaurant orders into ESC/POS print jobs for network
//! receipt printers. It provides:
//!
//! - **Ticket composition**: a pure engine turning an order into an
//!   ordered directive sequence (item-name normalization, currency
//!   formatting, payment breakdown, delivery bag tickets)
//! - **Protocol implementation**: ESC/POS command builders and code
//!   page encoding
//! - **Transport**: raw TCP to the printer (port 9100)
//! - **HTTP boundary**: the endpoints the point-of-sale frontend calls
//!
//! ## Quick Start
//!
//! ```no_run
//! use comanda::{
//!     order::Order,
//!     ticket::{LayoutConfig, compose},
//!     transport::NetworkTransport,
//! };
//!
//! // Parse an order (normally the JSON body of POST /imprimir)
//! let order: Order = serde_json::from_str(r#"{"items":[{"name":"Doble Cheddar","recipe_id":4,"quantity":1,"total_price":4500}],"total":"$4.500"}"#)?;
//! order.validate()?;
//!
//! // Compose the directive sequence and compile it to printer bytes
//! let sequence = compose(&order, &LayoutConfig::MOSTRADOR);
//! let data = sequence.to_bytes();
//!
//! // Send to the printer
//! let mut transport = NetworkTransport::open("192.168.1.100", 9100)?;
//! transport.send(&data)?;
//! transport.close();
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ticket`] | Order → directive sequence composition |
//! | [`directive`] | Typed directive sequence and ESC/POS codegen |
//! | [`protocol`] | ESC/POS command builders and encodings |
//! | [`order`] | Order data model |
//! | [`transport`] | Network transport |
//! | [`printer`] | Printer configuration |
//! | [`server`] | HTTP boundary |
//! | [`error`] | Error types |

pub mod directive;
pub mod error;
pub mod order;
pub mod printer;
pub mod protocol;
pub mod server;
pub mod ticket;
pub mod transport;

// Re-exports for convenience
pub use error::ComandaError;
pub use printer::PrinterConfig;
pub use transport::NetworkTransport;
