//! # Code Generation
//!
//! Compiles directive sequences to ESC/POS bytes.
//!
//! Text is encoded with the code page selected by the most recent
//! [`Directive::Encode`], so the bytes sent always match the code table
//! the printer was switched to. Before any `Encode` the printer's
//! power-on default (CP437) applies.

use super::ops::{Directive, Sequence};
use crate::protocol::text::CodePage;
use crate::protocol::{commands, encoding, text};

impl Sequence {
    /// Compile the sequence to ESC/POS bytes, in directive order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut page = CodePage::default();

        for directive in self.iter() {
            match directive {
                // ===== Printer Control =====
                Directive::HardwareInit => {
                    out.extend(commands::init());
                }
                Directive::Encode(cp) => {
                    page = *cp;
                    out.extend(text::codepage(*cp));
                }
                Directive::Feed(lines) => {
                    out.extend(commands::feed_lines(*lines));
                }
                Directive::Cut => {
                    out.extend(commands::cut_feed(0));
                }
                Directive::OpenCashDrawerPulse => {
                    out.extend(commands::drawer_pulse());
                }

                // ===== Style Changes =====
                Directive::SetAlign(alignment) => {
                    out.extend(text::align(*alignment));
                }
                Directive::SetFont(font) => {
                    out.extend(text::font(*font));
                }
                Directive::SetStyle(style) => {
                    out.extend(text::style(*style));
                }
                Directive::SetSize { width, height } => {
                    out.extend(text::size(*width, *height));
                }

                // ===== Content =====
                Directive::Text(s) => {
                    out.extend(encoding::encode(s, page));
                    out.push(commands::LF);
                }
                Directive::Raw(bytes) => {
                    out.extend(bytes);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::{Alignment, Font, Style};

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::new();
        assert!(seq.to_bytes().is_empty());
    }

    #[test]
    fn test_init_only() {
        let seq = Sequence::with_init();
        assert_eq!(seq.to_bytes(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_text_gets_line_feed() {
        let mut seq = Sequence::new();
        seq.push(Directive::Text("Hola".into()));
        assert_eq!(seq.to_bytes(), b"Hola\n");
    }

    #[test]
    fn test_text_encoded_with_selected_codepage() {
        let mut seq = Sequence::new();
        seq.push(Directive::Encode(CodePage::Cp858));
        seq.push(Directive::Text("ñ".into()));

        let bytes = seq.to_bytes();
        // ESC t 19, then the CP858 byte for ñ, then LF
        assert_eq!(bytes, vec![0x1B, 0x74, 19, 0xA4, 0x0A]);
    }

    #[test]
    fn test_text_defaults_to_cp437_before_encode() {
        let mut seq = Sequence::new();
        seq.push(Directive::Text("ñ".into()));
        // ñ maps to 0xA4 in CP437 as well; no ESC t is emitted
        assert_eq!(seq.to_bytes(), vec![0xA4, 0x0A]);
    }

    #[test]
    fn test_styled_text() {
        let mut seq = Sequence::with_init();
        seq.push(Directive::SetAlign(Alignment::Center));
        seq.push(Directive::SetStyle(Style::Bold));
        seq.push(Directive::SetFont(Font::B));
        seq.push(Directive::Text("TOTAL".into()));
        seq.push(Directive::SetStyle(Style::Normal));

        let bytes = seq.to_bytes();
        assert!(bytes.starts_with(&[0x1B, 0x40]));
        // center align (ESC a 1)
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x61, 0x01]));
        // bold on (ESC E 1) and off (ESC E 0)
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x01]));
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x00]));
        // font B (ESC M 1)
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x4D, 0x01]));
    }

    #[test]
    fn test_size() {
        let mut seq = Sequence::new();
        seq.push(Directive::SetSize { width: 1, height: 2 });
        assert_eq!(seq.to_bytes(), vec![0x1D, 0x21, 0x01]);
    }

    #[test]
    fn test_feed() {
        let mut seq = Sequence::new();
        seq.push(Directive::Feed(3));
        assert_eq!(seq.to_bytes(), vec![0x1B, 0x64, 0x03]);
    }

    #[test]
    fn test_cut() {
        let mut seq = Sequence::with_init();
        seq.push(Directive::Cut);
        assert!(seq.to_bytes().ends_with(&[0x1D, 0x56, 0x42, 0x00]));
    }

    #[test]
    fn test_drawer_pulse() {
        let mut seq = Sequence::new();
        seq.push(Directive::OpenCashDrawerPulse);
        assert_eq!(seq.to_bytes(), vec![0x1B, 0x70, 0x00, 25, 250]);
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        let mut seq = Sequence::new();
        seq.push(Directive::Raw(vec![0x1B, 0x42, 0x03, 0x02]));
        assert_eq!(seq.to_bytes(), vec![0x1B, 0x42, 0x03, 0x02]);
    }
}
