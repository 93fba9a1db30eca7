use dioxus::prelude::*;

use crate::settings::Settings;
use crate::state::document::QuoteDocument;
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
    notice: Signal<Option<String>>,
    selected_row: Signal<Option<usize>>,
    preview: Signal<Option<QuoteDocument>>,
) -> Element {
    let (mut session, mut language) = (session, language);
    let (mut error_message, mut selected_row) = (error_message, selected_row);
    let current_language = *language.read();
    let (can_undo, can_redo) = {
        let session = session.read();
        (session.quote.can_undo(), session.quote.can_redo())
    };

    let undo_label = i18n::tr(current_language, "toolbar.undo");
    let redo_label = i18n::tr(current_language, "toolbar.redo");
    let add_row_label = i18n::tr(current_language, "toolbar.add_row");
    let clear_table_label = i18n::tr(current_language, "toolbar.clear_table");
    let generate_label = i18n::tr(current_language, "toolbar.generate");

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                            actions::persist_language(settings, next_language, error_message);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-undo",
                    disabled: !can_undo,
                    onclick: move |_| {
                        if session.with_mut(|session| session.quote.undo()) {
                            selected_row.set(None);
                            error_message.set(None);
                        }
                    },
                    "\u{21A9} {undo_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-redo",
                    disabled: !can_redo,
                    onclick: move |_| {
                        if session.with_mut(|session| session.quote.redo()) {
                            selected_row.set(None);
                            error_message.set(None);
                        }
                    },
                    "\u{21AA} {redo_label}"
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-add-row",
                    onclick: move |_| {
                        let new_index = session.with_mut(|session| {
                            session.quote.add_row();
                            session.quote.rows().len().checked_sub(1)
                        });
                        selected_row.set(new_index);
                        error_message.set(None);
                    },
                    "\u{2795} {add_row_label}"
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-clear-table",
                    onclick: move |_| {
                        spawn(async move {
                            actions::clear_table(session, language, selected_row).await;
                        });
                    },
                    "\u{1F5D1} {clear_table_label}"
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn toolbar-btn-primary",
                    id: "btn-generate",
                    onclick: move |_| {
                        actions::generate_quotation(session, settings, preview, error_message);
                    },
                    "\u{1F4C4} {generate_label}"
                }
            }

            div { class: "toolbar-info",
                if let Some(text) = notice.read().as_ref() {
                    span { class: "save-success", "\u{2714} {text}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}
