//! Row pricing for the item table.

/// Numeric inputs of one item row after parsing.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineItem {
    pub quantity: f64,
    pub list_price: f64,
    pub max_discount_percent: f64,
    pub applied_discount_percent: f64,
}

/// A line item after pricing. `item` carries the clamped discount.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PricedItem {
    pub item: LineItem,
    pub unit_price_after_max_discount: f64,
    pub final_unit_price: f64,
    pub line_total: f64,
    pub clamped: bool,
}

/// Prices one row. Negative or non-finite inputs read as zero, percentages
/// are capped at 100, and the applied discount never exceeds the maximum.
/// A product that overflows to infinity also reads as zero.
pub fn recompute_row(item: LineItem) -> PricedItem {
    let quantity = non_negative(item.quantity);
    let list_price = non_negative(item.list_price);
    let max_discount = percent(item.max_discount_percent);
    let requested = percent(item.applied_discount_percent);

    let clamped = requested > max_discount;
    let applied = if clamped { max_discount } else { requested };

    let unit_price = non_negative(list_price * (1.0 - max_discount / 100.0));
    let final_unit_price = non_negative(unit_price * (1.0 - applied / 100.0));

    PricedItem {
        item: LineItem {
            quantity,
            list_price,
            max_discount_percent: max_discount,
            applied_discount_percent: applied,
        },
        unit_price_after_max_discount: unit_price,
        final_unit_price,
        line_total: non_negative(quantity * final_unit_price),
        clamped,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn percent(value: f64) -> f64 {
    non_negative(value).min(100.0)
}
