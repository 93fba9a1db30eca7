use dioxus::prelude::*;

use crate::io::preview_io;
use crate::state::document::QuoteDocument;
use crate::state::i18n::{self, Language};
use crate::ui::actions;

const PAGE_STYLES: Asset = asset!("/assets/document.css");

/// Page-by-page preview of the generated quotation. Each page can be left
/// out of the export with its checkbox.
#[component]
pub fn Preview(
    preview: Signal<Option<QuoteDocument>>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
    notice: Signal<Option<String>>,
) -> Element {
    let (mut preview, mut error_message) = (preview, error_message);
    let current_language = *language.read();
    let Some(quote_document) = preview.read().clone() else {
        return rsx! {};
    };

    // logos were embedded when the document was generated
    let logo = preview_io::logo_src(&quote_document.logo);
    let rendered: Vec<(usize, String, bool, String)> = quote_document
        .pages()
        .iter()
        .enumerate()
        .map(|(index, page)| {
            (
                index,
                page.title(),
                page.included,
                preview_io::render_page(&quote_document, page, &logo).unwrap_or_else(|err| {
                    tracing::error!(page = page.number, error = %err, "page render failed");
                    String::new()
                }),
            )
        })
        .collect();
    let included_count = rendered.iter().filter(|(_, _, included, _)| *included).count();

    let title = i18n::tr(current_language, "preview.title");
    let selected_label = i18n::tr_with(
        current_language,
        "preview.selected",
        &[
            ("count", included_count.to_string()),
            ("total", rendered.len().to_string()),
        ],
    );
    let select_all_label = i18n::tr(current_language, "preview.select_all");
    let deselect_all_label = i18n::tr(current_language, "preview.deselect_all");
    let export_label = i18n::tr(current_language, "preview.export");
    let close_label = i18n::tr(current_language, "preview.close");
    let include_label = i18n::tr(current_language, "preview.include");

    rsx! {
        document::Stylesheet { href: PAGE_STYLES }
        div { class: "toolbar preview-toolbar",
            div { class: "toolbar-group",
                strong { "{title}" }
                span { class: "page-count", "{selected_label}" }
            }
            div { class: "toolbar-separator" }
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-select-all",
                    onclick: move |_| {
                        preview.with_mut(|preview| {
                            if let Some(doc) = preview.as_mut() {
                                doc.select_all();
                            }
                        });
                        error_message.set(None);
                    },
                    "{select_all_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-deselect-all",
                    onclick: move |_| {
                        preview.with_mut(|preview| {
                            if let Some(doc) = preview.as_mut() {
                                doc.deselect_all();
                            }
                        });
                    },
                    "{deselect_all_label}"
                }
            }
            div { class: "toolbar-separator" }
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn toolbar-btn-primary",
                    id: "btn-export",
                    onclick: move |_| {
                        spawn(async move {
                            actions::export_preview(preview, language, error_message, notice).await;
                        });
                    },
                    "\u{1F4BE} {export_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-close-preview",
                    onclick: move |_| {
                        preview.set(None);
                        error_message.set(None);
                    },
                    "\u{2715} {close_label}"
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
        div { class: "preview-wrap",
            for (index, page_title, included, html) in rendered {
                div {
                    key: "{index}",
                    class: page_class(included),
                    label { class: "page-select",
                        input {
                            r#type: "checkbox",
                            checked: included,
                            onchange: move |evt| {
                                let checked = evt.checked();
                                preview.with_mut(|preview| {
                                    if let Some(doc) = preview.as_mut() {
                                        doc.set_included(index, checked);
                                    }
                                });
                            }
                        }
                        " {include_label}: {page_title}"
                    }
                    div { dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}

fn page_class(included: bool) -> &'static str {
    if included {
        "preview-page"
    } else {
        "preview-page excluded"
    }
}
