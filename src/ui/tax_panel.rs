use dioxus::prelude::*;

use crate::state::data_model::format_amount;
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;

#[component]
pub fn TaxPanel(session: Signal<QuoteSession>, language: Signal<Language>) -> Element {
    let mut session = session;
    let current_language = *language.read();
    let (rate_input, inter_state, tax) = {
        let session = session.read();
        (
            session.quote.gst_rate_input().to_string(),
            session.quote.is_inter_state(),
            *session.quote.tax(),
        )
    };

    let title = i18n::tr(current_language, "gst.title");
    let rate_label = i18n::tr(current_language, "gst.rate");
    let inter_state_label = i18n::tr(current_language, "gst.inter_state");

    let rows = [
        ("gst.taxable", "gst-taxable", tax.taxable_amount),
        ("gst.sgst", "sgst-amount", tax.sgst),
        ("gst.cgst", "cgst-amount", tax.cgst),
        ("gst.igst", "igst-amount", tax.igst),
        ("gst.total", "total-gst", tax.total_gst),
        ("gst.grand_total", "grand-total-with-gst", tax.grand_total),
    ];

    rsx! {
        section { class: "panel gst-section", id: "gst-section",
            h2 { "{title}" }
            table {
                tbody {
                    tr {
                        td { class: "gst-label", "{rate_label}" }
                        td {
                            input {
                                class: "toolbar-input toolbar-input-sm",
                                id: "gst-rate",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                value: "{rate_input}",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    session.with_mut(|session| session.quote.set_gst_rate_input(&value));
                                }
                            }
                        }
                    }
                    tr {
                        td { class: "gst-label", "{inter_state_label}" }
                        td {
                            input {
                                id: "is-inter-state",
                                r#type: "checkbox",
                                checked: inter_state,
                                onchange: move |evt| {
                                    let checked = evt.checked();
                                    session.with_mut(|session| session.quote.set_inter_state(checked));
                                }
                            }
                        }
                    }
                    for (key, id, amount) in rows {
                        tr {
                            td { class: "gst-label", "{i18n::tr(current_language, key)}" }
                            td { class: "gst-value", id: "{id}", "{format_amount(amount)}" }
                        }
                    }
                }
            }
        }
    }
}
