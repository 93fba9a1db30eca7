use std::time::Duration;

use dioxus::prelude::*;

use crate::io::{image_io, preview_io};
use crate::settings::Settings;
use crate::state::document::QuoteDocument;
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];
const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// Yes/No dialog; closing it counts as "no".
pub async fn confirm(language: Language, title_key: &'static str, description: String) -> bool {
    let answer = rfd::AsyncMessageDialog::new()
        .set_title(i18n::tr(language, title_key))
        .set_description(description)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;
    matches!(answer, rfd::MessageDialogResult::Yes)
}

pub async fn upload_images(
    mut session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    language: Signal<Language>,
    mut error_message: Signal<Option<String>>,
) {
    let picked = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(*language.read(), "dialog.image_filter"), IMAGE_EXTENSIONS)
        .pick_files()
        .await;
    let Some(handles) = picked else {
        return;
    };

    let paths: Vec<_> = handles.iter().map(|handle| handle.path().to_path_buf()).collect();
    let max_bytes = settings.read().max_upload_bytes;
    let (accepted, rejected) = image_io::load_images(&paths, max_bytes);

    session.with_mut(|session| {
        for upload in accepted {
            session.gallery.add(upload);
        }
    });

    if rejected.is_empty() {
        error_message.set(None);
    } else {
        let messages: Vec<String> = rejected.iter().map(ToString::to_string).collect();
        error_message.set(Some(messages.join(" ")));
    }
}

pub async fn upload_vendor_logo(
    mut session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    language: Signal<Language>,
    mut error_message: Signal<Option<String>>,
) {
    let picked = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(*language.read(), "dialog.logo_filter"), LOGO_EXTENSIONS)
        .pick_file()
        .await;
    let Some(handle) = picked else {
        error_message.set(Some(
            i18n::tr(*language.read(), "error.select_logo_first").to_string(),
        ));
        return;
    };

    let max_bytes = settings.read().max_upload_bytes;
    match image_io::load_logo(handle.path(), max_bytes) {
        Ok(upload) => {
            tracing::info!(name = %upload.name, "custom vendor logo uploaded");
            session.with_mut(|session| session.branding.set_custom_vendor_logo(upload));
            error_message.set(None);
        }
        Err(err) => error_message.set(Some(err.to_string())),
    }
}

pub async fn clear_images(
    mut session: Signal<QuoteSession>,
    language: Signal<Language>,
) {
    let count = session.read().gallery.len();
    if count == 0 {
        return;
    }
    let lang = *language.read();
    let description = i18n::tr_with(lang, "confirm.clear_images", &[("count", count.to_string())]);
    if confirm(lang, "confirm.title", description).await {
        session.with_mut(|session| session.gallery.clear());
    }
}

pub async fn clear_table(
    mut session: Signal<QuoteSession>,
    language: Signal<Language>,
    mut selected_row: Signal<Option<usize>>,
) {
    let lang = *language.read();
    let description = i18n::tr(lang, "confirm.clear_table").to_string();
    if confirm(lang, "confirm.title", description).await {
        session.with_mut(|session| session.quote.clear_table());
        selected_row.set(None);
    }
}

pub fn generate_quotation(
    session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    mut preview: Signal<Option<QuoteDocument>>,
    mut error_message: Signal<Option<String>>,
) {
    let mut document = session.read().build_document(&settings.read());
    preview_io::embed_logos(&mut document);
    preview.set(Some(document));
    error_message.set(None);
}

pub async fn export_preview(
    preview: Signal<Option<QuoteDocument>>,
    language: Signal<Language>,
    mut error_message: Signal<Option<String>>,
    notice: Signal<Option<String>>,
) {
    let Some(document) = preview.read().clone() else {
        return;
    };
    if let Err(err) = document.included_pages() {
        error_message.set(Some(err.to_string()));
        return;
    }

    let lang = *language.read();
    let picked = rfd::AsyncFileDialog::new()
        .add_filter(i18n::tr(lang, "dialog.html_filter"), &["html"])
        .set_file_name("quotation.html")
        .save_file()
        .await;
    let Some(handle) = picked else {
        return;
    };

    match preview_io::export_document(handle.path(), &document) {
        Ok(()) => {
            error_message.set(None);
            flash_notice(notice, i18n::tr(lang, "notice.exported").to_string());
        }
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            error_message.set(Some(err.to_string()));
        }
    }
}

pub fn persist_language(
    mut settings: Signal<Settings>,
    language: Language,
    mut error_message: Signal<Option<String>>,
) {
    settings.with_mut(|settings| settings.language = language.code().to_string());
    if let Err(err) = settings.read().save() {
        error_message.set(Some(err.to_string()));
    }
}

/// Shows a transient status message for two seconds.
pub fn flash_notice(mut notice: Signal<Option<String>>, text: String) {
    notice.set(Some(text));
    spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        notice.set(None);
    });
}
