//! # Layout Profiles and Column Math
//!
//! Two printer setups print these tickets: the counter printer
//! (font A, 48 columns, CP858) and the kitchen printer (font B, 64
//! columns, CP437). The composition algorithm is the same for both;
//! everything that differs between them lives in a [`LayoutConfig`]
//! so the two can never drift apart again.
//!
//! The differences are preserved exactly as the deployed printers
//! behave, including the ones that look accidental (the cheddar
//! exclusion abbreviation and whether extra fries become a name suffix
//! or a `+pp` token). Reconciling them would change tickets people
//! already read at a glance.

use crate::order::LineItem;
use crate::protocol::text::CodePage;

/// Pad a left/right text pair to exactly `width` characters.
///
/// When the pair does not fit, the two parts are joined with a single
/// space — never truncated, an unaligned line beats a lost token.
///
/// ## Example
///
/// ```
/// use comanda::ticket::layout::format_line;
///
/// assert_eq!(format_line("ab", "cd", 10), "ab      cd");
/// assert_eq!(format_line("abcdefgh", "ij", 5), "abcdefgh ij");
/// ```
pub fn format_line(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if used < width {
        format!("{}{}{}", left, " ".repeat(width - used), right)
    } else {
        format!("{} {}", left, right)
    }
}

/// How the combined modifier/exclusion line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierLineStyle {
    /// Two-space indent, tokens joined inline: `  +ch +ba s/tom`
    Inline,
    /// Modifiers left, exclusions right, padded to the column width.
    Columns,
}

/// Everything that differs between the two printer setups.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Profile name, used for CLI selection.
    pub name: &'static str,
    /// Column width for aligned lines.
    pub width: usize,
    /// Width of the separator rules between ticket sections.
    pub rule_width: usize,
    /// Code page the ticket text is encoded in.
    pub codepage: CodePage,
    /// Rendering of the modifier/exclusion line.
    pub modifier_line: ModifierLineStyle,
    /// Extra fries as a name suffix (` + EXTRA PAPAS`) instead of a
    /// `+pp` modifier token.
    pub papas_suffix: bool,
    /// Abbreviation for the cheddar exclusion.
    pub cheddar_exclusion: &'static str,
    /// Wrap the cash amount in a reverse-video pair.
    pub highlight_cash: bool,
}

impl LayoutConfig {
    /// Counter printer: font A paper, CP858, inline modifier lines,
    /// extra fries spelled out in the item name, cash highlighted so
    /// whoever hands over the bag collects the money.
    pub const MOSTRADOR: Self = Self {
        name: "mostrador",
        width: 48,
        rule_width: 32,
        codepage: CodePage::Cp858,
        modifier_line: ModifierLineStyle::Inline,
        papas_suffix: true,
        cheddar_exclusion: "s/ch",
        highlight_cash: true,
    };

    /// Kitchen printer: font B paper, CP437, column-aligned modifier
    /// lines, fries as a `+pp` token, no payment emphasis.
    pub const COCINA: Self = Self {
        name: "cocina",
        width: 64,
        rule_width: 48,
        codepage: CodePage::Cp437,
        modifier_line: ModifierLineStyle::Columns,
        papas_suffix: false,
        cheddar_exclusion: "s/pp",
        highlight_cash: false,
    };

    /// All built-in profiles.
    pub fn built_in() -> &'static [Self] {
        &[Self::MOSTRADOR, Self::COCINA]
    }

    /// Look up a profile by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        Self::built_in()
            .iter()
            .copied()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }

    /// The separator rule between ticket sections.
    pub fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    /// Modifier tokens for an item, in fixed check order:
    /// cheddar, bacon, papas, bbq. The papas token only exists in
    /// profiles that do not spell fries out in the item name.
    pub fn modifiers(&self, item: &LineItem) -> Vec<&'static str> {
        let rules = [
            ("+ch", item.extra_cheddar),
            ("+ba", item.extra_bacon),
            ("+pp", item.extra_papas && !self.papas_suffix),
            ("+bbq", item.bbq),
        ];
        rules
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(token, _)| token)
            .collect()
    }

    /// Exclusion tokens for an item, in fixed check order:
    /// salsa, cheddar, pepinos, tomate, lechuga, bacon.
    pub fn exclusions(&self, item: &LineItem) -> Vec<&'static str> {
        let rules = [
            ("s/s", item.no_salsa),
            (self.cheddar_exclusion, item.no_cheddar),
            ("s/pep", item.no_pepinos),
            ("s/tom", item.no_tomate),
            ("s/lech", item.no_lechuga),
            ("s/ba", item.no_bacon),
        ];
        rules
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(token, _)| token)
            .collect()
    }

    /// The combined modifier/exclusion line for an item, or `None` when
    /// no flag is set.
    pub fn extras_line(&self, item: &LineItem) -> Option<String> {
        let modifiers = self.modifiers(item);
        let exclusions = self.exclusions(item);
        if modifiers.is_empty() && exclusions.is_empty() {
            return None;
        }
        let line = match self.modifier_line {
            ModifierLineStyle::Inline => {
                format!("  {} {}", modifiers.join(" "), exclusions.join(" "))
            }
            ModifierLineStyle::Columns => {
                format_line(&modifiers.join(" "), &exclusions.join(" "), self.width)
            }
        };
        Some(line)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::MOSTRADOR
    }
}
