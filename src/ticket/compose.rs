//! # Ticket Composer
//!
//! Walks a validated order and emits the full directive sequence for one
//! print job: header, itemized body, totals, payment breakdown, footer,
//! and — for deliveries — one reduced bag ticket per bag.
//!
//! The emission order is the contract: directives come out exactly in
//! the order they print, and the composer never buffers or reorders.
//! Malformed optional fields degrade to empty/zero; the only input the
//! composer will not accept is an order with no items, which the HTTP
//! boundary rejects before calling in here.

use chrono::Local;

use crate::directive::{Directive, Sequence};
use crate::order::{LineItem, Order};
use crate::protocol::commands;
use crate::protocol::text::{Alignment, Font, Style};
use crate::ticket::currency::format_currency;
use crate::ticket::item_name::build_item_name;
use crate::ticket::layout::LayoutConfig;

/// Compose the full print sequence for an order.
///
/// Pure and deterministic: the same order and profile always produce the
/// same sequence. Performs no I/O.
pub fn compose(order: &Order, layout: &LayoutConfig) -> Sequence {
    let mut seq = Sequence::new();

    // Reset to a known state; nothing may leak from the previous job on
    // the same physical printer.
    seq.push(Directive::HardwareInit);
    seq.push(Directive::Encode(layout.codepage));
    seq.push(Directive::SetFont(Font::A));
    seq.push(Directive::SetSize { width: 1, height: 1 });
    seq.push(Directive::SetAlign(Alignment::Center));
    seq.push(Directive::SetStyle(Style::Bold));

    // Header: delivery hour, then client in the small font.
    seq.push(Directive::Text(
        order.delivery_hour.clone().unwrap_or_default(),
    ));
    seq.push(Directive::Feed(1));
    seq.push(Directive::SetFont(Font::B));
    seq.push(Directive::SetSize { width: 1, height: 1 });
    seq.push(Directive::SetStyle(Style::Bold));
    seq.push(Directive::Text(order.client.clone().unwrap_or_default()));

    // Observation line, left-aligned, then back to centered.
    if let Some(comment) = order.print_comment.as_deref()
        && !comment.is_empty()
    {
        seq.push(Directive::Feed(1));
        seq.push(Directive::SetAlign(Alignment::Left));
        seq.push(Directive::Text(format!("OBS: {}", comment)));
        seq.push(Directive::SetAlign(Alignment::Center));
    }

    seq.push(Directive::Text(layout.rule()));
    seq.push(Directive::SetAlign(Alignment::Left));

    // Items: one name line per unit, with the modifier/exclusion line
    // repeated under each unit so every burger wrapper gets its own.
    for item in order.items.iter().filter(|item| !item.is_extra) {
        let name = printable_name(item, layout);
        let extras = layout.extras_line(item);
        for _ in 0..item.quantity {
            seq.push(Directive::Text(name.clone()));
            if let Some(line) = &extras {
                seq.push(Directive::Text(line.clone()));
            }
        }
        seq.push(Directive::Feed(1));
    }

    // Total, right-aligned; the value arrives display-ready.
    seq.push(Directive::Text(layout.rule()));
    seq.push(Directive::SetAlign(Alignment::Right));
    seq.push(Directive::SetStyle(Style::Bold));
    seq.push(Directive::Text(format!("TOTAL: {}", order.total)));
    seq.push(Directive::Feed(1));

    // Payment breakdown, fixed order: cash, transfer, card.
    if order.payments.cash > 0.0 {
        if layout.highlight_cash {
            seq.push(Directive::Raw(commands::reverse(true)));
        }
        seq.push(Directive::Text(cash_line(order.payments.cash)));
        if layout.highlight_cash {
            seq.push(Directive::Raw(commands::reverse(false)));
        }
        seq.push(Directive::Feed(1));
    }
    if order.payments.transfer > 0.0 {
        // Label spelling preserved from the receipts already in the wild.
        seq.push(Directive::Text(format!(
            "Tranferencia: {}",
            format_currency(order.payments.transfer)
        )));
        seq.push(Directive::Feed(1));
    }
    if order.payments.card > 0.0 {
        seq.push(Directive::Text(format!(
            "Tarjeta: {}",
            format_currency(order.payments.card)
        )));
        seq.push(Directive::Feed(1));
    }

    // Footer: date, positioning pulse, cut.
    seq.push(Directive::SetStyle(Style::Normal));
    seq.push(Directive::Feed(1));
    seq.push(Directive::SetAlign(Alignment::Left));
    seq.push(Directive::Text(order.date.clone().unwrap_or_default()));
    seq.push(Directive::Feed(2));
    seq.push(Directive::Raw(commands::positioning_pulse()));
    seq.push(Directive::Cut);

    if order.is_delivery {
        append_bag_tickets(&mut seq, order);
    }

    seq
}

/// Resolve the printable name for a line item.
///
/// Recipe items go through name normalization (and, in profiles that
/// spell fries out, get the suffix); custom items print verbatim.
fn printable_name(item: &LineItem, layout: &LayoutConfig) -> String {
    if item.recipe_id.is_some() {
        let mut name = build_item_name(item);
        if layout.papas_suffix && item.extra_papas {
            name.push_str(" + EXTRA PAPAS");
        }
        name
    } else {
        item.display_name().to_string()
    }
}

/// One reduced ticket per delivery bag: two burgers fit a bag, so the
/// bag count is the countable line-item count halved, rounded up. Note
/// this counts order slots, not units — a line with quantity 4 still
/// counts once. That is how bags have always been counted here; see the
/// pinning test before "fixing" it.
fn append_bag_tickets(seq: &mut Sequence, order: &Order) {
    let bags = order.countable_items().div_ceil(2);
    let client = order.client.clone().unwrap_or_default();

    for _ in 0..bags {
        // Full style re-establishment: the bag block shares no state
        // with the main ticket.
        seq.push(Directive::Feed(3));
        seq.push(Directive::SetFont(Font::A));
        seq.push(Directive::SetSize { width: 1, height: 2 });
        seq.push(Directive::SetStyle(Style::Bold));
        seq.push(Directive::SetAlign(Alignment::Center));
        seq.push(Directive::Text(client.clone()));
        seq.push(Directive::Feed(1));
        if order.payments.cash > 0.0 {
            seq.push(Directive::Text(cash_line(order.payments.cash)));
        }
        seq.push(Directive::Feed(3));
        seq.push(Directive::Cut);
    }
}

fn cash_line(amount: f64) -> String {
    format!("Efectivo: {}", format_currency(amount))
}

/// The fixed diagnostic ticket for the test-print endpoint: a banner,
/// one rule per supported column width, and a timestamp.
pub fn test_sequence() -> Sequence {
    let mut seq = Sequence::with_init();
    seq.push(Directive::SetAlign(Alignment::Center));
    seq.push(Directive::SetStyle(Style::Bold));
    seq.push(Directive::Text("*** PRUEBA DE IMPRESORA ***".to_string()));
    seq.push(Directive::SetStyle(Style::Normal));
    seq.push(Directive::Text(current_datetime()));
    seq.push(Directive::Feed(1));
    seq.push(Directive::Text("-".repeat(48)));
    seq.push(Directive::Feed(1));
    seq.push(Directive::SetFont(Font::B));
    seq.push(Directive::Text("-".repeat(64)));
    seq.push(Directive::Feed(2));
    seq.push(Directive::Cut);
    seq
}

/// Current local date and time for the diagnostic ticket.
pub fn current_datetime() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Payments;
    use pretty_assertions::assert_eq;

    fn burger(name: &str, quantity: u32) -> LineItem {
        LineItem {
            name: Some(name.to_string()),
            recipe_id: Some(1),
            quantity,
            ..Default::default()
        }
    }

    fn base_order(items: Vec<LineItem>) -> Order {
        Order {
            delivery_hour: Some("21:30".to_string()),
            client: Some("Mariana".to_string()),
            total: "$9.000".to_string(),
            items,
            ..Default::default()
        }
    }

    fn texts(seq: &Sequence) -> Vec<&str> {
        seq.iter()
            .filter_map(|d| match d {
                Directive::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_starts_with_init_and_encoding() {
        let seq = compose(&base_order(vec![burger("Simple", 1)]), &LayoutConfig::MOSTRADOR);
        let directives = seq.finalize();
        assert_eq!(directives[0], Directive::HardwareInit);
        assert_eq!(
            directives[1],
            Directive::Encode(LayoutConfig::MOSTRADOR.codepage)
        );
    }

    #[test]
    fn test_name_printed_once_per_unit() {
        let seq = compose(&base_order(vec![burger("Doble Cheddar", 3)]), &LayoutConfig::MOSTRADOR);
        let names: Vec<_> = texts(&seq)
            .into_iter()
            .filter(|t| *t == "Cheddar II")
            .collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_extras_line_repeats_per_unit() {
        let mut item = burger("Doble Cheddar", 2);
        item.no_tomate = true;
        let seq = compose(&base_order(vec![item]), &LayoutConfig::MOSTRADOR);
        // Inline style: two-space indent, empty modifier side keeps its join space
        let extras: Vec<_> = texts(&seq)
            .into_iter()
            .filter(|t| *t == "   s/tom")
            .collect();
        assert_eq!(extras.len(), 2);
    }

    #[test]
    fn test_extra_items_not_printed() {
        let mut extra = burger("Medallón suelto", 1);
        extra.is_extra = true;
        let seq = compose(
            &base_order(vec![burger("Simple", 1), extra]),
            &LayoutConfig::MOSTRADOR,
        );
        assert!(!texts(&seq).iter().any(|t| t.contains("Medall")));
    }

    #[test]
    fn test_custom_item_prints_verbatim() {
        let item = LineItem {
            name: Some("Pedido especial doble".to_string()),
            quantity: 1,
            ..Default::default()
        };
        let seq = compose(&base_order(vec![item]), &LayoutConfig::MOSTRADOR);
        // No recipe_id: no normalization, no Roman numeral
        assert!(texts(&seq).contains(&"Pedido especial doble"));
    }

    #[test]
    fn test_papas_suffix_by_profile() {
        let mut item = burger("Simple", 1);
        item.extra_papas = true;

        let counter = compose(&base_order(vec![item.clone()]), &LayoutConfig::MOSTRADOR);
        assert!(texts(&counter).contains(&"I + EXTRA PAPAS"));

        let kitchen = compose(&base_order(vec![item]), &LayoutConfig::COCINA);
        assert!(texts(&kitchen).contains(&"I"));
        assert!(texts(&kitchen).iter().any(|t| t.starts_with("+pp")));
    }

    #[test]
    fn test_observation_line() {
        let mut order = base_order(vec![burger("Simple", 1)]);
        order.print_comment = Some("sin sal".to_string());
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        assert!(texts(&seq).contains(&"OBS: sin sal"));
    }

    #[test]
    fn test_empty_observation_omitted() {
        let mut order = base_order(vec![burger("Simple", 1)]);
        order.print_comment = Some(String::new());
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        assert!(!texts(&seq).iter().any(|t| t.starts_with("OBS:")));
    }

    #[test]
    fn test_total_printed_verbatim() {
        let seq = compose(&base_order(vec![burger("Simple", 1)]), &LayoutConfig::MOSTRADOR);
        assert!(texts(&seq).contains(&"TOTAL: $9.000"));
    }

    #[test]
    fn test_payment_lines_in_fixed_order() {
        let mut order = base_order(vec![burger("Simple", 1)]);
        order.payments = Payments {
            cash: 1000.0,
            transfer: 2500.0,
            card: 3000.0,
        };
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        let lines = texts(&seq);
        let cash = lines.iter().position(|t| *t == "Efectivo: $1.000").unwrap();
        let transfer = lines
            .iter()
            .position(|t| *t == "Tranferencia: $2.500")
            .unwrap();
        let card = lines.iter().position(|t| *t == "Tarjeta: $3.000").unwrap();
        assert!(cash < transfer && transfer < card);
    }

    #[test]
    fn test_zero_payments_omitted() {
        let seq = compose(&base_order(vec![burger("Simple", 1)]), &LayoutConfig::MOSTRADOR);
        assert!(!texts(&seq).iter().any(|t| t.starts_with("Efectivo")
            || t.starts_with("Tranferencia")
            || t.starts_with("Tarjeta")));
    }

    #[test]
    fn test_cash_highlight_only_on_counter_profile() {
        let mut order = base_order(vec![burger("Simple", 1)]);
        order.payments.cash = 1000.0;

        let counter = compose(&order, &LayoutConfig::MOSTRADOR);
        let reverse_count = counter
            .iter()
            .filter(|d| matches!(d, Directive::Raw(b) if b[..2] == [0x1D, 0x42]))
            .count();
        assert_eq!(reverse_count, 2);

        let kitchen = compose(&order, &LayoutConfig::COCINA);
        let reverse_count = kitchen
            .iter()
            .filter(|d| matches!(d, Directive::Raw(b) if b[..2] == [0x1D, 0x42]))
            .count();
        assert_eq!(reverse_count, 0);
    }

    #[test]
    fn test_main_ticket_ends_with_pulse_and_cut() {
        let seq = compose(&base_order(vec![burger("Simple", 1)]), &LayoutConfig::MOSTRADOR);
        let directives = seq.finalize();
        let len = directives.len();
        assert_eq!(
            directives[len - 2],
            Directive::Raw(vec![0x1B, 0x42, 0x03, 0x02])
        );
        assert_eq!(directives[len - 1], Directive::Cut);
    }

    #[test]
    fn test_no_bag_tickets_without_delivery() {
        let seq = compose(&base_order(vec![burger("Simple", 1)]), &LayoutConfig::MOSTRADOR);
        let cuts = seq.iter().filter(|d| **d == Directive::Cut).count();
        assert_eq!(cuts, 1);
    }

    #[test]
    fn test_bag_count_rounds_up() {
        let mut order = base_order(vec![
            burger("Simple", 1),
            burger("Doble", 1),
            burger("Onion", 1),
            burger("Cheddar", 1),
            burger("Bacon", 1),
        ]);
        order.is_delivery = true;
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        // 5 countable items -> 3 bags -> 1 main cut + 3 bag cuts
        let cuts = seq.iter().filter(|d| **d == Directive::Cut).count();
        assert_eq!(cuts, 4);
    }

    #[test]
    fn test_bag_count_ignores_quantity() {
        // One line with quantity 6 is still one order slot -> one bag.
        let mut order = base_order(vec![burger("Simple", 6)]);
        order.is_delivery = true;
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        let cuts = seq.iter().filter(|d| **d == Directive::Cut).count();
        assert_eq!(cuts, 2);
    }

    #[test]
    fn test_bag_ticket_restates_styles() {
        let mut order = base_order(vec![burger("Simple", 1)]);
        order.is_delivery = true;
        order.payments.cash = 5000.0;
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        let directives = seq.finalize();

        // Locate the start of the bag block (after the main cut)
        let main_cut = directives
            .iter()
            .position(|d| *d == Directive::Cut)
            .unwrap();
        let bag = &directives[main_cut + 1..];
        assert_eq!(bag[0], Directive::Feed(3));
        assert_eq!(bag[1], Directive::SetFont(Font::A));
        assert_eq!(bag[2], Directive::SetSize { width: 1, height: 2 });
        assert_eq!(bag[3], Directive::SetStyle(Style::Bold));
        assert_eq!(bag[4], Directive::SetAlign(Alignment::Center));
        assert_eq!(bag[5], Directive::Text("Mariana".to_string()));
        assert!(bag.contains(&Directive::Text("Efectivo: $5.000".to_string())));
        assert_eq!(bag[bag.len() - 1], Directive::Cut);
    }

    #[test]
    fn test_missing_optionals_degrade_to_empty() {
        let order = Order {
            items: vec![burger("Simple", 1)],
            ..Default::default()
        };
        let seq = compose(&order, &LayoutConfig::MOSTRADOR);
        // Header and date lines still exist, empty
        let lines = texts(&seq);
        assert!(lines.iter().filter(|t| t.is_empty()).count() >= 2);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let mut order = base_order(vec![burger("Doble Cheddar", 2), burger("Simple", 1)]);
        order.is_delivery = true;
        order.payments.cash = 18000.0;
        let a = compose(&order, &LayoutConfig::MOSTRADOR);
        let b = compose(&order, &LayoutConfig::MOSTRADOR);
        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_test_sequence_shape() {
        let seq = test_sequence();
        let directives = seq.as_slice();
        assert_eq!(directives[0], Directive::HardwareInit);
        assert!(texts(&seq).contains(&"*** PRUEBA DE IMPRESORA ***"));
        assert!(texts(&seq).iter().any(|t| *t == "-".repeat(48)));
        assert!(texts(&seq).iter().any(|t| *t == "-".repeat(64)));
        assert_eq!(directives[directives.len() - 1], Directive::Cut);
    }
}
