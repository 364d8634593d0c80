//! # ESC/POS Printer Control Commands
//!
//! Command builders for printer control: initialization, paper feed,
//! cutting, and cash drawer pulses.
//!
//! ## Escape Sequence Structure
//!
//! ESC/POS commands are byte sequences starting with an escape character:
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC d n`, `GS V 66 n`, `ESC p m t1 t2`
//!
//! ## Reference
//!
//! Epson "ESC/POS Application Programming Guide".

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutting, character size, reverse printing and other extended
/// commands. Hex: 0x1D, Decimal: 29.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state: clears the line
/// buffer, disables emphasis, resets character size to 1x1 and alignment
/// to left. Sent at the start of every job so state never leaks from a
/// previous print on the same physical printer.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED AND CUTTER
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints any data in the line buffer and feeds the paper forward by
/// `n` text lines at the current line spacing.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Feed and Full Cut (GS V 66 n)
///
/// Feeds `n` lines so the last printed line clears the cutter, then
/// performs a full cut. Letting the printer manage the cutter-to-head
/// distance wastes less top margin on the next ticket than a separate
/// feed + cut pair.
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V 66 n  |
/// | Hex     | 1D 56 42 n |
#[inline]
pub fn cut_feed(n: u8) -> Vec<u8> {
    vec![GS, b'V', 66, n]
}

// ============================================================================
// CASH DRAWER AND PULSES
// ============================================================================

/// # Cash Drawer Kick (ESC p m t1 t2)
///
/// Generates a pulse on drawer connector pin 2, which opens the cash
/// drawer attached to the printer's RJ11 port.
///
/// | Format  | Bytes            |
/// |---------|------------------|
/// | ASCII   | ESC p 0 25 250   |
/// | Hex     | 1B 70 00 19 FA   |
///
/// `t1`/`t2` are the pulse on/off times in 2ms units; 25/250 is the
/// conventional pairing that works across drawer models.
#[inline]
pub fn drawer_pulse() -> Vec<u8> {
    vec![ESC, b'p', 0, 25, 250]
}

/// # End-of-Ticket Positioning Pulse (ESC B 3 2)
///
/// Fixed low-level sequence sent right before the cut on the main
/// ticket. Preserved byte-for-byte from the receipts already in the
/// wild; on the deployed printer it nudges paper positioning (and rings
/// the buzzer on models that map ESC B to it).
#[inline]
pub fn positioning_pulse() -> Vec<u8> {
    vec![ESC, b'B', 3, 2]
}

// ============================================================================
// REVERSE PRINTING
// ============================================================================

/// # White/Black Reverse Printing (GS B n)
///
/// Enables or disables reverse (white on black) printing. Used as an
/// emphasis pair around the cash amount so the person packing the order
/// cannot miss that change is needed.
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | ASCII   | GS B n |
/// | Hex     | 1D 42 n |
#[inline]
pub fn reverse(enabled: bool) -> Vec<u8> {
    vec![GS, b'B', enabled as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(feed_lines(3), vec![0x1B, 0x64, 0x03]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_cut_feed() {
        assert_eq!(cut_feed(0), vec![0x1D, 0x56, 0x42, 0x00]);
        assert_eq!(cut_feed(3), vec![0x1D, 0x56, 0x42, 0x03]);
    }

    #[test]
    fn test_drawer_pulse() {
        assert_eq!(drawer_pulse(), vec![0x1B, 0x70, 0x00, 25, 250]);
    }

    #[test]
    fn test_positioning_pulse() {
        assert_eq!(positioning_pulse(), vec![0x1B, 0x42, 0x03, 0x02]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(true), vec![0x1D, 0x42, 0x01]);
        assert_eq!(reverse(false), vec![0x1D, 0x42, 0x00]);
    }
}
