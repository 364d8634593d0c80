//! # Order Data Model
//!
//! The order as the point-of-sale frontend posts it. Deserialized once at
//! the HTTP boundary; read-only for the rest of the pipeline.
//!
//! Top-level keys arrive camelCase (`deliveryHour`, `printComment`,
//! `isDelivery`), line item keys snake_case — the model mirrors the wire
//! format rather than normalizing it, so existing frontends keep working
//! unchanged. Every optional field degrades to an empty/zero default
//! instead of failing deserialization.

use serde::Deserialize;

use crate::error::ComandaError;

/// One restaurant order, immutable during composition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Promised delivery/pickup hour, printed in the ticket header.
    #[serde(default)]
    pub delivery_hour: Option<String>,

    /// Client name, printed in the header and on every bag ticket.
    #[serde(default)]
    pub client: Option<String>,

    /// Free-text observation; printed as an `OBS:` line when non-empty.
    #[serde(default)]
    pub print_comment: Option<String>,

    /// Ordered line items. An order with no items is invalid and must be
    /// rejected before composition.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Display-ready total, already formatted upstream; printed verbatim.
    #[serde(default)]
    pub total: String,

    /// Amount paid per payment method; zero means the method was not used.
    #[serde(default)]
    pub payments: Payments,

    /// Order date, printed in the footer.
    #[serde(default)]
    pub date: Option<String>,

    /// Whether this order leaves in delivery bags (triggers bag tickets).
    #[serde(default)]
    pub is_delivery: bool,
}

impl Order {
    /// Reject orders that cannot produce a ticket.
    ///
    /// Runs at the HTTP boundary, before composition: the composer itself
    /// assumes a validated order and always produces a complete sequence.
    pub fn validate(&self) -> Result<(), ComandaError> {
        if self.items.is_empty() {
            return Err(ComandaError::InvalidOrder("Pedido inválido".to_string()));
        }
        Ok(())
    }

    /// Number of items that count for bag-splitting: one per line item
    /// with `is_extra == false`, regardless of quantity.
    pub fn countable_items(&self) -> usize {
        self.items.iter().filter(|item| !item.is_extra).count()
    }
}

/// One order line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    /// Product name. Older frontends send the key as `nombre`.
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,

    /// Non-countable add-on already folded into another line: excluded
    /// from the printed item list and from the bag count.
    #[serde(default)]
    pub is_extra: bool,

    /// Recipe identifier. Presence selects the name-normalization path;
    /// items without one print their name verbatim.
    #[serde(default)]
    pub recipe_id: Option<i64>,

    /// Units ordered; the name line is printed once per unit.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Total price for the line (all units).
    #[serde(default)]
    pub total_price: f64,

    // Modifier flags, checked in a fixed order by the layout rules.
    #[serde(default)]
    pub extra_medallon: bool,
    #[serde(default)]
    pub extra_2medallones: bool,
    #[serde(default)]
    pub extra_cheddar: bool,
    #[serde(default)]
    pub extra_bacon: bool,
    #[serde(default)]
    pub extra_papas: bool,
    #[serde(default)]
    pub bbq: bool,

    // Exclusion flags, same deal.
    #[serde(default)]
    pub no_salsa: bool,
    #[serde(default)]
    pub no_cheddar: bool,
    #[serde(default)]
    pub no_pepinos: bool,
    #[serde(default)]
    pub no_tomate: bool,
    #[serde(default)]
    pub no_lechuga: bool,
    #[serde(default)]
    pub no_bacon: bool,
}

impl LineItem {
    /// The raw product name, empty when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Price per unit. Not rendered by the current layouts but kept as a
    /// hook for layouts that print a price column.
    pub fn unit_price(&self) -> f64 {
        if self.quantity == 0 {
            return 0.0;
        }
        self.total_price / self.quantity as f64
    }
}

fn default_quantity() -> u32 {
    1
}

/// Payment breakdown. Methods at zero are omitted from the ticket.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub transfer: f64,
    #[serde(default)]
    pub card: f64,
}
