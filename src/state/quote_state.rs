use std::num::NonZeroUsize;

use crate::state::data_model::{self, format_number, parse_number, ItemColumn, ItemRow};
use crate::state::paginate::{self, Page};
use crate::state::tax::{self, TaxContext};

#[derive(Clone, Debug, PartialEq)]
struct HistoryEntry {
    rows: Vec<ItemRow>,
    gst_rate_input: String,
    inter_state: bool,
}

/// Item table plus the GST inputs. Every mutation reprices what it touched
/// and then rebuilds the tax totals from all rows.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteState {
    rows: Vec<ItemRow>,
    gst_rate_input: String,
    inter_state: bool,
    tax: TaxContext,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteState {
    pub fn new() -> Self {
        Self::with_rate(0.0)
    }

    pub fn with_rate(gst_rate: f64) -> Self {
        let mut state = Self {
            rows: vec![ItemRow::new()],
            gst_rate_input: format_number(gst_rate),
            inter_state: false,
            tax: TaxContext::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        };
        state.refresh_totals();
        state
    }

    pub fn from_rows(rows: Vec<ItemRow>, gst_rate: f64, inter_state: bool) -> Self {
        let mut state = Self::with_rate(gst_rate);
        if !rows.is_empty() {
            state.rows = rows;
        }
        state.inter_state = inter_state;
        for row in &mut state.rows {
            row.recompute();
        }
        state.refresh_totals();
        state
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn tax(&self) -> &TaxContext {
        &self.tax
    }

    pub fn gst_rate_input(&self) -> &str {
        &self.gst_rate_input
    }

    pub fn is_inter_state(&self) -> bool {
        self.inter_state
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn cell_display_value(&self, row_index: usize, column: ItemColumn) -> String {
        match column {
            ItemColumn::SerialNo if row_index < self.rows.len() => (row_index + 1).to_string(),
            _ => self
                .rows
                .get(row_index)
                .map(|row| row.cell_text(column))
                .unwrap_or_default(),
        }
    }

    /// Stores the typed text, reprices the row and rebuilds the totals.
    /// Returns false when nothing changed or the cell is not editable.
    pub fn set_cell_from_input(&mut self, row_index: usize, column: ItemColumn, input: &str) -> bool {
        let Some(row) = self.rows.get(row_index) else {
            return false;
        };
        let mut next = row.clone();
        if !next.set_cell_text(column, input) {
            return false;
        }

        self.push_undo_snapshot();
        if next.recompute() {
            tracing::debug!(
                row = row_index + 1,
                discount = %next.discount,
                "discount clamped to row maximum"
            );
        }
        self.rows[row_index] = next;
        self.refresh_totals();
        true
    }

    pub fn set_gst_rate_input(&mut self, input: &str) -> bool {
        if self.gst_rate_input == input {
            return false;
        }
        self.push_undo_snapshot();
        self.gst_rate_input = input.to_string();
        self.refresh_totals();
        true
    }

    pub fn set_inter_state(&mut self, inter_state: bool) -> bool {
        if self.inter_state == inter_state {
            return false;
        }
        self.push_undo_snapshot();
        self.inter_state = inter_state;
        self.refresh_totals();
        true
    }

    pub fn add_row(&mut self) -> bool {
        self.push_undo_snapshot();
        data_model::add_row(&mut self.rows);
        self.refresh_totals();
        true
    }

    pub fn delete_row(&mut self, row_index: usize) -> bool {
        if row_index >= self.rows.len() {
            return false;
        }

        self.push_undo_snapshot();
        let removed = data_model::delete_row(&mut self.rows, row_index);
        self.refresh_totals();
        removed
    }

    pub fn clear_table(&mut self) -> bool {
        if self.rows.len() == 1 && self.rows[0].is_blank() {
            return false;
        }
        self.push_undo_snapshot();
        data_model::clear_rows(&mut self.rows);
        self.refresh_totals();
        true
    }

    pub fn undo(&mut self) -> bool {
        if let Some(entry) = self.undo_stack.pop() {
            self.redo_stack.push(self.snapshot());
            self.restore(entry);
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if let Some(entry) = self.redo_stack.pop() {
            self.undo_stack.push(self.snapshot());
            self.restore(entry);
            true
        } else {
            false
        }
    }

    /// Cell texts of every row, serial number first.
    pub fn export_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| row.export_cells(idx + 1))
            .collect()
    }

    pub fn paginate_rows(&self, page_size: NonZeroUsize) -> Vec<Page<Vec<String>, TaxContext>> {
        paginate::paginate(&self.export_rows(), page_size, self.tax)
    }

    fn refresh_totals(&mut self) {
        self.tax = tax::recompute_tax(
            self.rows.iter().map(ItemRow::line_total),
            parse_number(&self.gst_rate_input),
            self.inter_state,
        );
    }

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            rows: self.rows.clone(),
            gst_rate_input: self.gst_rate_input.clone(),
            inter_state: self.inter_state,
        }
    }

    fn push_undo_snapshot(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.rows = entry.rows;
        self.gst_rate_input = entry.gst_rate_input;
        self.inter_state = entry.inter_state;
        for row in &mut self.rows {
            row.recompute();
        }
        self.refresh_totals();
    }
}
