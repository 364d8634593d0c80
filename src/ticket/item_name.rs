//! # Item Name Normalization
//!
//! Derives the printable name for a recipe item. Burger recipes encode
//! the patty count in the product name ("Simple …", "Doble …"); the
//! kitchen reads patty counts as Roman numerals, so "Doble Cheddar" with
//! one extra patty prints as "Cheddar III".
//!
//! Items without a recipe id skip all of this and print verbatim.

use crate::order::LineItem;

/// Qualifier words stripped from recipe names, first occurrence each,
/// case-insensitive. "doble" also contributes to the patty count before
/// it is stripped.
const QUALIFIERS: [&str; 3] = ["simple", "doble", "onion"];

/// Roman numerals for patty counts 1-5, in order. Counts above the table
/// fall back to the decimal representation.
const ROMAN: [&str; 5] = ["I", "II", "III", "IV", "V"];

/// Patty count to Roman numeral (decimal string above V).
pub fn to_roman(count: u32) -> String {
    match count {
        1..=5 => ROMAN[count as usize - 1].to_string(),
        _ => count.to_string(),
    }
}

/// Build the printable name for a recipe line item.
///
/// 1. Base patty count: 2 if the name contains "doble", else 1.
/// 2. `extra_medallon` adds 1, `extra_2medallones` adds 2 (they stack).
/// 3. Qualifier words are stripped, whitespace collapsed.
/// 4. The count is appended as a Roman numeral.
///
/// ## Example
///
/// ```
/// use comanda::order::LineItem;
/// use comanda::ticket::item_name::build_item_name;
///
/// let item = LineItem {
///     name: Some("Doble Cheddar".into()),
///     extra_medallon: true,
///     ..Default::default()
/// };
/// assert_eq!(build_item_name(&item), "Cheddar III");
/// ```
pub fn build_item_name(item: &LineItem) -> String {
    let name = item.display_name();

    let mut patties = if contains_ignore_case(name, "doble") { 2 } else { 1 };
    if item.extra_medallon {
        patties += 1;
    }
    if item.extra_2medallones {
        patties += 2;
    }

    let mut cleaned = name.to_string();
    for word in QUALIFIERS {
        cleaned = strip_first_ignore_case(&cleaned, word);
    }
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    format!("{} {}", cleaned, to_roman(patties))
        .trim()
        .to_string()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// Remove the first case-insensitive occurrence of an ASCII word.
///
/// ASCII lowercasing preserves byte offsets, so the position found in
/// the lowercased copy is valid in the original.
fn strip_first_ignore_case(haystack: &str, word: &str) -> String {
    match haystack.to_ascii_lowercase().find(word) {
        Some(pos) => {
            let mut out = String::with_capacity(haystack.len() - word.len());
            out.push_str(&haystack[..pos]);
            out.push_str(&haystack[pos + word.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}
