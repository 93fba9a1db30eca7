use crate::state::data_model::{format_amount, format_number};

/// GST breakdown for a set of line totals. Rebuilt from scratch on every
/// change; nothing here is stored between edits.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TaxContext {
    pub taxable_amount: f64,
    pub gst_rate_percent: f64,
    pub is_inter_state: bool,
    pub sgst: f64,
    pub cgst: f64,
    pub igst: f64,
    pub total_gst: f64,
    pub grand_total: f64,
}

/// A label/value pair of the printed tax summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Every amount in the result is finite; a sum or product that overflows
/// reads as zero.
pub fn recompute_tax<I>(line_totals: I, rate: f64, is_inter_state: bool) -> TaxContext
where
    I: IntoIterator<Item = f64>,
{
    let taxable_amount = finite_or_zero(line_totals.into_iter().sum());
    let rate = if rate.is_finite() && rate > 0.0 { rate } else { 0.0 };

    let (sgst, cgst, igst) = if is_inter_state {
        (0.0, 0.0, finite_or_zero(taxable_amount * (rate / 100.0)))
    } else {
        let half = finite_or_zero(taxable_amount * (rate / 200.0));
        (half, half, 0.0)
    };
    let total_gst = finite_or_zero(sgst + cgst + igst);

    TaxContext {
        taxable_amount,
        gst_rate_percent: rate,
        is_inter_state,
        sgst,
        cgst,
        igst,
        total_gst,
        grand_total: finite_or_zero(taxable_amount + total_gst),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl TaxContext {
    /// Rows of the GST block printed under the last item table page.
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        vec![
            SummaryLine {
                label: "Taxable Amount",
                value: format_amount(self.taxable_amount),
            },
            SummaryLine {
                label: "GST Rate (%)",
                value: format_number(self.gst_rate_percent),
            },
            SummaryLine {
                label: "Inter-State (IGST)",
                value: if self.is_inter_state { "Yes" } else { "No" }.to_string(),
            },
            SummaryLine {
                label: "SGST",
                value: format_amount(self.sgst),
            },
            SummaryLine {
                label: "CGST",
                value: format_amount(self.cgst),
            },
            SummaryLine {
                label: "IGST",
                value: format_amount(self.igst),
            },
            SummaryLine {
                label: "Total GST",
                value: format_amount(self.total_gst),
            },
            SummaryLine {
                label: "Grand Total (incl. GST)",
                value: format_amount(self.grand_total),
            },
        ]
    }
}
