use dioxus::prelude::*;

use crate::settings::Settings;
use crate::state::gallery::GalleryImage;
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;
use crate::ui::actions;

#[component]
pub fn Gallery(
    session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
) -> Element {
    let current_language = *language.read();
    let images: Vec<GalleryImage> = session.read().gallery.images().to_vec();
    let dragged = use_signal::<Option<u64>>(|| None);

    let title = i18n::tr_with(
        current_language,
        "gallery.title",
        &[("count", images.len().to_string())],
    );
    let upload_label = i18n::tr(current_language, "gallery.upload");
    let clear_label = i18n::tr(current_language, "gallery.clear");
    let empty_label = i18n::tr(current_language, "gallery.empty");
    let last_index = images.len().saturating_sub(1);

    rsx! {
        section { class: "panel gallery", id: "image-gallery",
            div { class: "panel-header",
                h2 { "{title}" }
                button {
                    class: "toolbar-btn",
                    id: "btn-upload-images",
                    onclick: move |_| {
                        spawn(async move {
                            actions::upload_images(session, settings, language, error_message).await;
                        });
                    },
                    "\u{1F4C2} {upload_label}"
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-clear-images",
                    disabled: images.is_empty(),
                    onclick: move |_| {
                        spawn(async move {
                            actions::clear_images(session, language).await;
                        });
                    },
                    "\u{1F5D1} {clear_label}"
                }
            }
            if images.is_empty() {
                div { class: "hint", "{empty_label}" }
            } else {
                div { class: "image-grid",
                    for (index, image) in images.iter().cloned().enumerate() {
                        ImageCard {
                            key: "{image.id}",
                            index,
                            is_last: index == last_index,
                            image: image.clone(),
                            session,
                            dragged,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ImageCard(
    index: usize,
    is_last: bool,
    image: GalleryImage,
    session: Signal<QuoteSession>,
    dragged: Signal<Option<u64>>,
) -> Element {
    let (mut session, mut dragged) = (session, dragged);
    let id = image.id;
    let is_dragging = *dragged.read() == Some(id);
    let card_class = if is_dragging {
        "image-card dragging"
    } else {
        "image-card"
    };
    let position = index + 1;

    rsx! {
        div {
            class: card_class,
            id: format!("image-{id}"),
            draggable: "true",
            ondragstart: move |_| {
                dragged.set(Some(id));
            },
            ondragend: move |_| {
                dragged.set(None);
            },
            ondragover: move |evt| {
                evt.prevent_default();
            },
            ondrop: move |evt| {
                evt.prevent_default();
                let source = *dragged.peek();
                dragged.set(None);
                if let Some(source) = source {
                    session.with_mut(|session| {
                        session.gallery.drop_onto(source, index);
                    });
                }
            },
            img { src: "{image.upload.data_url}", alt: "{image.upload.name}" }
            div { class: "image-info",
                span { class: "image-position", "#{position}" }
                span { class: "image-name", title: "{image.upload.name}", "{image.upload.name}" }
                span { class: "image-size", "{image.size_label()}" }
            }
            div { class: "image-actions",
                button {
                    class: "image-btn",
                    disabled: index == 0,
                    onclick: move |_| {
                        session.with_mut(|session| {
                            session.gallery.move_up(index);
                        });
                    },
                    "\u{2191}"
                }
                button {
                    class: "image-btn",
                    disabled: is_last,
                    onclick: move |_| {
                        session.with_mut(|session| {
                            session.gallery.move_down(index);
                        });
                    },
                    "\u{2193}"
                }
                button {
                    class: "image-btn image-btn-danger",
                    onclick: move |_| {
                        session.with_mut(|session| {
                            session.gallery.remove(id);
                        });
                    },
                    "\u{2715}"
                }
            }
        }
    }
}
