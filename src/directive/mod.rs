//! # Printer Directives
//!
//! The directive layer is the boundary between the pure ticket
//! composition engine and the stateful printer. A ticket is composed as
//! an ordered [`Sequence`] of typed [`Directive`] values that can be
//! inspected and tested without a printer, then compiled to ESC/POS
//! bytes and handed to a transport.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌───────────────┐     ┌─────────┐     ┌───────────┐
//! │  Order   │ ──► │   Sequence    │ ──► │ Codegen │ ──► │ Transport │
//! │  (JSON)  │     │ (Vec<Directive>)│   │ (bytes) │     │ (TCP 9100)│
//! └──────────┘     └───────────────┘     └─────────┘     └───────────┘
//! ```
//!
//! Directive order is exactly the physical print order: the sequence is
//! append-only and the codegen never reorders.
//!
//! ## Example
//!
//! ```
//! use comanda::directive::{Directive, Sequence};
//! use comanda::protocol::text::{Alignment, Style};
//!
//! let mut seq = Sequence::with_init();
//! seq.push(Directive::SetAlign(Alignment::Center));
//! seq.push(Directive::SetStyle(Style::Bold));
//! seq.push(Directive::Text("COMANDA".into()));
//! seq.push(Directive::Cut);
//!
//! let bytes = seq.to_bytes();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//! ```

mod codegen;
mod ops;

pub use ops::*;
