use dioxus::prelude::*;

use crate::state::data_model::ItemColumn;
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;

#[component]
pub fn ItemTable(
    session: Signal<QuoteSession>,
    language: Signal<Language>,
    selected_row: Signal<Option<usize>>,
) -> Element {
    let current_language = *language.read();
    let row_count = session.read().quote.rows().len();
    let title = i18n::tr(current_language, "table.title");
    let action_label = i18n::tr(current_language, "table.action");

    rsx! {
        section { class: "panel table-container", id: "item-table",
            h2 { "{title}" }
            table {
                thead {
                    tr {
                        for column in ItemColumn::all().iter().copied() {
                            th { class: header_class(column), "{column.header()}" }
                        }
                        th { class: "row-action", "{action_label}" }
                    }
                }
                tbody {
                    for row_index in 0..row_count {
                        ItemRowView { key: "{row_index}", row_index, session, selected_row }
                    }
                }
            }
        }
    }
}

#[component]
fn ItemRowView(
    row_index: usize,
    session: Signal<QuoteSession>,
    selected_row: Signal<Option<usize>>,
) -> Element {
    let (mut session, mut selected_row) = (session, selected_row);
    let is_selected = *selected_row.read() == Some(row_index);
    let mut row_class = if row_index % 2 == 0 { "even" } else { "odd" }.to_string();
    if is_selected {
        row_class.push_str(" selected-row");
    }

    let cells: Vec<(ItemColumn, String)> = {
        let session = session.read();
        ItemColumn::all()
            .iter()
            .map(|column| (*column, session.quote.cell_display_value(row_index, *column)))
            .collect()
    };

    rsx! {
        tr { class: "{row_class}", id: format!("row-{row_index}"),
            for (column, text) in cells {
                if column.is_editable() {
                    td { class: cell_class(column),
                        input {
                            class: "cell-input",
                            id: format!("cell-{row_index}-{}", column.id()),
                            value: "{text}",
                            onfocus: move |_| {
                                selected_row.set(Some(row_index));
                            },
                            oninput: move |evt| {
                                let value = evt.value();
                                session.with_mut(|session| {
                                    session.quote.set_cell_from_input(row_index, column, &value);
                                });
                            }
                        }
                    }
                } else {
                    td {
                        class: cell_class(column),
                        id: format!("cell-{row_index}-{}", column.id()),
                        onclick: move |_| {
                            selected_row.set(Some(row_index));
                        },
                        "{text}"
                    }
                }
            }
            td { class: "row-action",
                button {
                    class: "delete-row-btn",
                    id: format!("btn-delete-row-{row_index}"),
                    onclick: move |_| {
                        if session.with_mut(|session| session.quote.delete_row(row_index)) {
                            selected_row.set(None);
                        }
                    },
                    "\u{1F5D1}"
                }
            }
        }
    }
}

fn header_class(column: ItemColumn) -> String {
    join_classes("col-header", &cell_class(column))
}

fn cell_class(column: ItemColumn) -> String {
    let kind = if column == ItemColumn::SerialNo {
        "row-number"
    } else if !column.is_editable() {
        "cell-derived"
    } else if column.is_numeric() {
        "cell-numeric"
    } else {
        ""
    };
    join_classes("cell", kind)
}

fn join_classes(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }
    format!("{a} {b}")
}
