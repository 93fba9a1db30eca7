use dioxus::prelude::*;

use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;
use crate::state::terms::{sub_row_label, PriceTerms};

#[component]
pub fn TermsPanel(session: Signal<QuoteSession>, language: Signal<Language>) -> Element {
    let mut session = session;
    let current_language = *language.read();
    let terms: PriceTerms = session.read().terms.clone();

    let title = i18n::tr(current_language, "terms.title");
    let number_label = i18n::tr(current_language, "terms.number");
    let description_label = i18n::tr(current_language, "terms.description");
    let value_label = i18n::tr(current_language, "terms.value");
    let action_label = i18n::tr(current_language, "table.action");
    let add_label = i18n::tr(current_language, "terms.add_row");

    rsx! {
        section { class: "panel price-schedule", id: "price-schedule",
            h2 { "{title}" }
            table {
                thead {
                    tr {
                        th { "{number_label}" }
                        th { "{description_label}" }
                        th { "{value_label}" }
                        th { class: "row-action", "{action_label}" }
                    }
                }
                tbody {
                    tr { class: "main-row",
                        td { class: "row-number", "1" }
                        td {
                            input {
                                class: "cell-input",
                                id: "term-main-description",
                                value: "{terms.heading.description}",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    session.with_mut(|session| session.terms.heading.description = value);
                                }
                            }
                        }
                        td {
                            input {
                                class: "cell-input",
                                id: "term-main-value",
                                value: "{terms.heading.value}",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    session.with_mut(|session| session.terms.heading.value = value);
                                }
                            }
                        }
                        td { class: "row-action" }
                    }
                    for (index, row) in terms.sub_rows().iter().enumerate() {
                        tr { key: "{index}", class: "sub-row",
                            td { class: "row-number", "{sub_row_label(index)}" }
                            td {
                                input {
                                    class: "cell-input",
                                    value: "{row.description}",
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        session.with_mut(|session| {
                                            if let Some(row) = session.terms.sub_row_mut(index) {
                                                row.description = value;
                                            }
                                        });
                                    }
                                }
                            }
                            td {
                                input {
                                    class: "cell-input",
                                    value: "{row.value}",
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        session.with_mut(|session| {
                                            if let Some(row) = session.terms.sub_row_mut(index) {
                                                row.value = value;
                                            }
                                        });
                                    }
                                }
                            }
                            td { class: "row-action",
                                button {
                                    class: "delete-row-btn",
                                    onclick: move |_| {
                                        session.with_mut(|session| {
                                            session.terms.delete_sub_row(index);
                                        });
                                    },
                                    "\u{1F5D1}"
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "toolbar-btn",
                id: "btn-add-sub-row",
                onclick: move |_| {
                    session.with_mut(|session| {
                        session.terms.add_sub_row();
                    });
                },
                "\u{2795} {add_label}"
            }
        }
    }
}
