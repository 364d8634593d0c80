//! # Printer Transport Layer
//!
//! Communication backends for sending directive bytes to printers.
//!
//! ## Available Transports
//!
//! - [`network`]: raw TCP to port 9100 (the de facto standard for
//!   networked thermal printers)
//!
//! The transport owns the only stateful resource in the pipeline (the
//! socket). Callers open, send one compiled sequence, and close — at
//! most one transmission in flight per physical printer.

pub mod network;

pub use network::NetworkTransport;
