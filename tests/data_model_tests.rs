use quotesheet::state::data_model::{
    self, format_amount, format_number, parse_number, ItemColumn, ItemRow,
};

#[test]
fn test_parse_number_reads_leading_numeric_prefix() {
    assert_eq!(parse_number("42"), 42.0);
    assert_eq!(parse_number("  12.5 pcs"), 12.5);
    assert_eq!(parse_number("12abc"), 12.0);
    assert_eq!(parse_number("-3"), -3.0);
    assert_eq!(parse_number(".5"), 0.5);
    assert_eq!(parse_number("5."), 5.0);
    assert_eq!(parse_number("1e3"), 1000.0);
    assert_eq!(parse_number("2e"), 2.0);
}

#[test]
fn test_parse_number_defaults_to_zero() {
    assert_eq!(parse_number("abc"), 0.0);
    assert_eq!(parse_number(""), 0.0);
    assert_eq!(parse_number("."), 0.0);
    assert_eq!(parse_number("-"), 0.0);
    assert_eq!(parse_number("1e999"), 0.0);
}

#[test]
fn test_format_amount_rounds_to_cents() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(640.0), "640.00");
    assert_eq!(format_amount(2.346), "2.35");
    assert_eq!(format_amount(-0.001), "0.00");
    assert_eq!(format_amount(1180.0), "1180.00");
}

#[test]
fn test_format_number_drops_trailing_zero() {
    assert_eq!(format_number(20.0), "20");
    assert_eq!(format_number(12.5), "12.5");
}

#[test]
fn test_column_layout() {
    let columns = ItemColumn::all();
    assert_eq!(columns.len(), 11);
    assert_eq!(columns[0], ItemColumn::SerialNo);
    assert_eq!(columns[10], ItemColumn::Total);

    let derived: Vec<ItemColumn> = columns
        .iter()
        .copied()
        .filter(|column| !column.is_editable())
        .collect();
    assert_eq!(
        derived,
        vec![ItemColumn::SerialNo, ItemColumn::UnitPrice, ItemColumn::Total]
    );
}

#[test]
fn test_recompute_overwrites_clamped_discount_text() {
    let mut row = ItemRow::new();
    row.quantity = "10".to_string();
    row.list_price = "100".to_string();
    row.max_discount = "20".to_string();
    row.discount = "30".to_string();

    assert!(row.recompute());
    assert_eq!(row.discount, "20");
    assert_eq!(row.cell_text(ItemColumn::UnitPrice), "80.00");
    assert_eq!(row.cell_text(ItemColumn::Total), "640.00");
}

#[test]
fn test_recompute_keeps_discount_within_ceiling() {
    let mut row = ItemRow::new();
    row.quantity = "2".to_string();
    row.list_price = "50".to_string();
    row.max_discount = "10".to_string();
    row.discount = "5".to_string();

    assert!(!row.recompute());
    assert_eq!(row.discount, "5");
    assert_eq!(row.cell_text(ItemColumn::Total), "85.50");
}

#[test]
fn test_set_cell_text_rejects_derived_and_unchanged() {
    let mut row = ItemRow::new();
    assert!(!row.set_cell_text(ItemColumn::Total, "99"));
    assert!(!row.set_cell_text(ItemColumn::SerialNo, "1"));
    assert!(row.set_cell_text(ItemColumn::Make, "Rockwell"));
    assert!(!row.set_cell_text(ItemColumn::Make, "Rockwell"));
    assert_eq!(row.make, "Rockwell");
}

#[test]
fn test_export_cells_trim_and_number() {
    let mut row = ItemRow::new();
    row.description = "  PLC module ".to_string();
    row.quantity = "1".to_string();
    row.list_price = "250".to_string();
    row.recompute();

    let cells = row.export_cells(3);
    assert_eq!(cells.len(), ItemColumn::all().len());
    assert_eq!(cells[0], "3");
    assert_eq!(cells[1], "PLC module");
    assert_eq!(cells[10], "250.00");
}

#[test]
fn test_delete_last_row_leaves_one_empty_row() {
    let mut rows = vec![ItemRow::new()];
    rows[0].description = "Only".to_string();

    assert!(data_model::delete_row(&mut rows, 0));
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_blank());
    assert!(!data_model::delete_row(&mut rows, 5));
}

#[test]
fn test_clear_rows_leaves_one_empty_row() {
    let mut rows = vec![ItemRow::new(), ItemRow::new(), ItemRow::new()];
    rows[1].quantity = "4".to_string();
    data_model::clear_rows(&mut rows);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_blank());
}
