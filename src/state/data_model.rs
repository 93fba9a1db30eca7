use crate::state::calculator::{self, LineItem, PricedItem};

/// Editable and derived columns of the item table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemColumn {
    SerialNo,
    Description,
    Make,
    PartNo,
    Quantity,
    Unit,
    ListPrice,
    MaxDiscount,
    UnitPrice,
    Discount,
    Total,
}

impl ItemColumn {
    pub fn all() -> &'static [Self] {
        &[
            Self::SerialNo,
            Self::Description,
            Self::Make,
            Self::PartNo,
            Self::Quantity,
            Self::Unit,
            Self::ListPrice,
            Self::MaxDiscount,
            Self::UnitPrice,
            Self::Discount,
            Self::Total,
        ]
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::SerialNo => "Sl. No",
            Self::Description => "Description",
            Self::Make => "Make",
            Self::PartNo => "Part No.",
            Self::Quantity => "Qty",
            Self::Unit => "Unit",
            Self::ListPrice => "List Price",
            Self::MaxDiscount => "Max Disc. %",
            Self::UnitPrice => "Unit Price",
            Self::Discount => "Disc. %",
            Self::Total => "Total",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::SerialNo => "sl",
            Self::Description => "description",
            Self::Make => "make",
            Self::PartNo => "part_no",
            Self::Quantity => "qty",
            Self::Unit => "unit",
            Self::ListPrice => "list_price",
            Self::MaxDiscount => "max_discount",
            Self::UnitPrice => "unit_price",
            Self::Discount => "discount",
            Self::Total => "total",
        }
    }

    /// Serial number and the two price outputs are never typed into.
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::SerialNo | Self::UnitPrice | Self::Total)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Quantity | Self::ListPrice | Self::MaxDiscount | Self::Discount
        )
    }
}

/// One row of the item table. Cells keep the raw text the user typed; the
/// priced view is refreshed by [`ItemRow::recompute`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ItemRow {
    pub description: String,
    pub make: String,
    pub part_no: String,
    pub quantity: String,
    pub unit: String,
    pub list_price: String,
    pub max_discount: String,
    pub discount: String,
    priced: PricedItem,
}

impl ItemRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priced(&self) -> &PricedItem {
        &self.priced
    }

    pub fn line_total(&self) -> f64 {
        self.priced.line_total
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.description,
            &self.make,
            &self.part_no,
            &self.quantity,
            &self.unit,
            &self.list_price,
            &self.max_discount,
            &self.discount,
        ]
        .iter()
        .all(|cell| cell.trim().is_empty())
    }

    pub fn line_item(&self) -> LineItem {
        LineItem {
            quantity: parse_number(&self.quantity),
            list_price: parse_number(&self.list_price),
            max_discount_percent: parse_number(&self.max_discount),
            applied_discount_percent: parse_number(&self.discount),
        }
    }

    /// Re-prices the row. When the discount cell exceeded the ceiling its
    /// text is replaced by the clamped value. Returns whether that happened.
    pub fn recompute(&mut self) -> bool {
        self.priced = calculator::recompute_row(self.line_item());
        if self.priced.clamped {
            self.discount = format_number(self.priced.item.applied_discount_percent);
        }
        self.priced.clamped
    }

    /// Raw text of a cell. Derived columns are rendered to two decimals and
    /// the serial number is left to the caller since it depends on position.
    pub fn cell_text(&self, column: ItemColumn) -> String {
        match column {
            ItemColumn::SerialNo => String::new(),
            ItemColumn::Description => self.description.clone(),
            ItemColumn::Make => self.make.clone(),
            ItemColumn::PartNo => self.part_no.clone(),
            ItemColumn::Quantity => self.quantity.clone(),
            ItemColumn::Unit => self.unit.clone(),
            ItemColumn::ListPrice => self.list_price.clone(),
            ItemColumn::MaxDiscount => self.max_discount.clone(),
            ItemColumn::UnitPrice => format_amount(self.priced.unit_price_after_max_discount),
            ItemColumn::Discount => self.discount.clone(),
            ItemColumn::Total => format_amount(self.priced.line_total),
        }
    }

    /// Writes raw text into an editable cell. Returns false for derived
    /// columns or when the text is unchanged.
    pub fn set_cell_text(&mut self, column: ItemColumn, text: &str) -> bool {
        let slot = match column {
            ItemColumn::Description => &mut self.description,
            ItemColumn::Make => &mut self.make,
            ItemColumn::PartNo => &mut self.part_no,
            ItemColumn::Quantity => &mut self.quantity,
            ItemColumn::Unit => &mut self.unit,
            ItemColumn::ListPrice => &mut self.list_price,
            ItemColumn::MaxDiscount => &mut self.max_discount,
            ItemColumn::Discount => &mut self.discount,
            ItemColumn::SerialNo | ItemColumn::UnitPrice | ItemColumn::Total => return false,
        };
        if slot == text {
            return false;
        }
        *slot = text.to_string();
        true
    }

    /// Trimmed cell texts in column order with the 1-based serial number
    /// in front, as they appear in the exported table.
    pub fn export_cells(&self, serial: usize) -> Vec<String> {
        ItemColumn::all()
            .iter()
            .map(|column| match column {
                ItemColumn::SerialNo => serial.to_string(),
                other => self.cell_text(*other).trim().to_string(),
            })
            .collect()
    }
}

/// Parses the leading decimal number of free-form cell text. Anything that
/// does not start with a number, or is not finite, reads as zero.
pub fn parse_number(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Rounds half away from zero to cents and renders two decimals.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    // avoids "-0.00"
    let cents = if cents == 0.0 { 0.0 } else { cents };
    format!("{cents:.2}")
}

/// Shortest display of a number, without a trailing ".0" for integers.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

pub fn add_row(rows: &mut Vec<ItemRow>) {
    rows.push(ItemRow::new());
}

/// Removes a row, re-creating one empty row if the table would be empty.
pub fn delete_row(rows: &mut Vec<ItemRow>, row_index: usize) -> bool {
    if row_index >= rows.len() {
        return false;
    }
    rows.remove(row_index);
    if rows.is_empty() {
        rows.push(ItemRow::new());
    }
    true
}

pub fn clear_rows(rows: &mut Vec<ItemRow>) {
    rows.clear();
    rows.push(ItemRow::new());
}
