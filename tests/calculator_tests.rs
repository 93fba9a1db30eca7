use quotesheet::state::calculator::{recompute_row, LineItem};
use quotesheet::state::data_model::{format_amount, parse_number};

fn item(quantity: f64, list_price: f64, max: f64, applied: f64) -> LineItem {
    LineItem {
        quantity,
        list_price,
        max_discount_percent: max,
        applied_discount_percent: applied,
    }
}

#[test]
fn test_discount_above_ceiling_is_clamped() {
    let priced = recompute_row(item(10.0, 100.0, 20.0, 30.0));

    assert!(priced.clamped);
    assert_eq!(priced.item.applied_discount_percent, 20.0);
    assert_eq!(format_amount(priced.unit_price_after_max_discount), "80.00");
    assert_eq!(format_amount(priced.final_unit_price), "64.00");
    assert_eq!(format_amount(priced.line_total), "640.00");
}

#[test]
fn test_applied_never_exceeds_max() {
    let cases = [
        (0.0, 0.0),
        (0.0, 15.0),
        (10.0, 10.0),
        (10.0, 99.0),
        (55.5, 55.6),
        (100.0, 250.0),
        (-5.0, 3.0),
        (f64::NAN, 12.0),
    ];
    for (max, applied) in cases {
        let priced = recompute_row(item(1.0, 10.0, max, applied));
        assert!(
            priced.item.applied_discount_percent <= priced.item.max_discount_percent,
            "max {max}, applied {applied}"
        );
    }
}

#[test]
fn test_percentages_are_capped_at_100() {
    let priced = recompute_row(item(3.0, 50.0, 150.0, 120.0));
    assert_eq!(priced.item.max_discount_percent, 100.0);
    assert_eq!(priced.item.applied_discount_percent, 100.0);
    assert_eq!(priced.unit_price_after_max_discount, 0.0);
    assert_eq!(priced.line_total, 0.0);
}

#[test]
fn test_non_numeric_text_prices_as_zero() {
    let priced = recompute_row(item(
        parse_number("abc"),
        parse_number("n/a"),
        parse_number(""),
        parse_number("--"),
    ));
    assert_eq!(priced.line_total, 0.0);
    assert!(!priced.clamped);
}

#[test]
fn test_non_finite_inputs_read_as_zero() {
    let priced = recompute_row(item(f64::INFINITY, f64::NAN, 10.0, 5.0));
    assert_eq!(priced.item.quantity, 0.0);
    assert_eq!(priced.item.list_price, 0.0);
    assert!(priced.line_total.is_finite());
}
