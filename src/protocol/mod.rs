//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers
//! (Epson TM series and the many compatible network printers that listen
//! on raw TCP port 9100).
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, cut, feed, drawer pulse)
//! - [`text`]: Text styling (alignment, fonts, bold, character size, code page)
//! - [`encoding`]: Unicode to single-byte code page conversion
//!
//! ## Usage Example
//!
//! ```
//! use comanda::protocol::{commands, text};
//! use comanda::protocol::text::Alignment;
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"COMANDA\n");
//! data.extend(commands::cut_feed(0));
//! // Send `data` to printer via transport...
//! ```
//!
//! ## Reference
//!
//! Based on the Epson "ESC/POS Application Programming Guide". Commands
//! were chosen for broad compatibility with generic 80mm network printers.

pub mod commands;
pub mod encoding;
pub mod text;
