//! # ESC/POS Text Styling Commands
//!
//! Text formatting commands: alignment, font selection, emphasis,
//! character size, and code page selection.
//!
//! ## Font Selection
//!
//! | Font | Char Size | Columns (80mm) |
//! |------|-----------|----------------|
//! | A    | 12x24     | 48             |
//! | B    | 9x17      | 64             |

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent lines. Affects all following text
/// until changed; reset by ESC @.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// `n = 0`: left (default), `n = 1`: center, `n = 2`: right.
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12x24 dots, 48 columns on 80mm paper
    #[default]
    A = 0,
    /// Font B: 9x17 dots, 64 columns on 80mm paper
    B = 1,
}

/// # Select Font (ESC M n)
///
/// Selects the character font for subsequent text.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// Text emphasis state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// No emphasis
    #[default]
    Normal,
    /// Emphasized (double-strike) printing
    Bold,
}

/// # Set Emphasis (ESC E n)
///
/// Enables or disables emphasized (bold) printing.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

/// Emit the command for a [`Style`] value.
#[inline]
pub fn style(s: Style) -> Vec<u8> {
    bold(s == Style::Bold)
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (GS ! n)
///
/// Sets horizontal and vertical character magnification. Multipliers are
/// 1-based (1 = normal, 2 = double, up to 8); values outside that range
/// are clamped.
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
///
/// The parameter packs both multipliers: the high nibble is width - 1,
/// the low nibble is height - 1.
///
/// ## Example
///
/// ```
/// use comanda::protocol::text::size;
///
/// // Normal 1x1
/// assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
/// // Double height (bag ticket headline)
/// assert_eq!(size(1, 2), vec![0x1D, 0x21, 0x01]);
/// ```
pub fn size(width_mult: u8, height_mult: u8) -> Vec<u8> {
    let w = width_mult.clamp(1, 8) - 1;
    let h = height_mult.clamp(1, 8) - 1;
    vec![GS, b'!', (w << 4) | h]
}

// ============================================================================
// CODE PAGE SELECTION
// ============================================================================

/// Code pages supported by the ticket layouts.
///
/// The numeric value is the ESC/POS code table number, not the IBM code
/// page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CodePage {
    /// Code Page 437 (US English, printer power-on default)
    #[default]
    Cp437 = 0,
    /// Code Page 858 (Multilingual Latin + Euro)
    Cp858 = 19,
}

/// # Select Character Code Table (ESC t n)
///
/// Selects the code page the printer uses to render bytes 0x80-0xFF.
/// Must match the encoding applied to the text bytes themselves (see
/// [`super::encoding`]).
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
pub fn codepage(cp: CodePage) -> Vec<u8> {
    vec![ESC, b't', cp as u8]
}

// ============================================================================
// TESTS
// ============================================================================
