use dioxus::prelude::*;

use crate::settings::Settings;
use crate::state::branding::{self, VendorCatalog, VendorChoice};
use crate::state::details::{OfferField, QuoteMeta};
use crate::state::i18n::{self, Language};
use crate::state::session::QuoteSession;
use crate::ui::actions;

#[derive(Clone, Copy, PartialEq)]
enum MetaField {
    QuoteNo,
    RevNo,
    ProjectName,
    QuoteDate,
}

impl MetaField {
    const ALL: [Self; 4] = [Self::QuoteNo, Self::RevNo, Self::ProjectName, Self::QuoteDate];

    fn label_key(self) -> &'static str {
        match self {
            Self::QuoteNo => "meta.quote_no",
            Self::RevNo => "meta.rev_no",
            Self::ProjectName => "meta.project_name",
            Self::QuoteDate => "meta.quote_date",
        }
    }

    fn value(self, meta: &QuoteMeta) -> &str {
        match self {
            Self::QuoteNo => &meta.quote_no,
            Self::RevNo => &meta.rev_no,
            Self::ProjectName => &meta.project_name,
            Self::QuoteDate => &meta.quote_date,
        }
    }

    fn slot(self, meta: &mut QuoteMeta) -> &mut String {
        match self {
            Self::QuoteNo => &mut meta.quote_no,
            Self::RevNo => &mut meta.rev_no,
            Self::ProjectName => &mut meta.project_name,
            Self::QuoteDate => &mut meta.quote_date,
        }
    }
}

#[component]
pub fn DetailsPanel(
    session: Signal<QuoteSession>,
    settings: Signal<Settings>,
    language: Signal<Language>,
    error_message: Signal<Option<String>>,
    vendors: Signal<VendorCatalog>,
    company_logos: Signal<Vec<String>>,
) -> Element {
    let mut session = session;
    let current_language = *language.read();
    let (branding_state, details, bom_text) = {
        let session = session.read();
        (
            session.branding.clone(),
            session.details.clone(),
            session.bom_text.clone(),
        )
    };
    let assets_dir = settings.read().assets_dir.clone();

    let logo_value = branding_state.company_logo().unwrap_or("").to_string();
    let logo_preview = branding_state
        .company_logo()
        .map(|name| branding::company_logo_path(&assets_dir, Some(name)));
    let vendor_value = branding_state.vendor_dropdown_value().to_string();
    let vendor_preview = match branding_state.vendor() {
        VendorChoice::Catalog(id) => Some(
            branding::vendor_logo_path(&assets_dir, id)
                .display()
                .to_string(),
        ),
        VendorChoice::Custom(Some(upload)) => Some(upload.data_url.clone()),
        _ => None,
    };
    let wants_custom = branding_state.wants_custom_upload();

    let logo_label = i18n::tr(current_language, "branding.logo");
    let vendor_label = i18n::tr(current_language, "branding.vendor");
    let select_logo = i18n::tr(current_language, "branding.select_logo");
    let select_vendor = i18n::tr(current_language, "branding.select_vendor");
    let upload_logo_label = i18n::tr(current_language, "branding.upload_custom");
    let custom_hint = i18n::tr(current_language, "branding.custom_hint");
    let offer_title = i18n::tr(current_language, "offer.title");
    let project_title = i18n::tr(current_language, "project.title");
    let add_revision_label = i18n::tr(current_language, "project.add_revision");
    let company_title = i18n::tr(current_language, "company.title");
    let meta_title = i18n::tr(current_language, "meta.title");
    let bom_title = i18n::tr(current_language, "bom.title");
    let bom_placeholder = i18n::tr(current_language, "bom.placeholder");

    rsx! {
        section { class: "panel details", id: "details-panel",
            div { class: "details-group",
                label { class: "field-label", "{logo_label}" }
                select {
                    class: "toolbar-select",
                    id: "logo-dropdown",
                    value: "{logo_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        session.with_mut(|session| session.branding.select_company_logo(&value));
                    },
                    option { value: "", "{select_logo}" }
                    for name in company_logos.read().iter() {
                        option { value: "{name}", "{branding::company_logo_display_name(name)}" }
                    }
                }
                div { class: "logo-container", id: "logo-container",
                    if let Some(path) = logo_preview.as_ref() {
                        img { src: "{path.display()}", alt: "{logo_value} logo" }
                    }
                }

                label { class: "field-label", "{vendor_label}" }
                select {
                    class: "toolbar-select",
                    id: "vendor-dropdown",
                    value: "{vendor_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        session.with_mut(|session| session.branding.select_vendor(&value));
                    },
                    option { value: "", "{select_vendor}" }
                    for vendor in vendors.read().vendors.iter() {
                        option { value: "{vendor.id}", "{vendor.display_name()}" }
                    }
                }
                div { class: "vendor-container", id: "vendor-container",
                    if let Some(src) = vendor_preview.as_ref() {
                        img { src: "{src}", alt: "vendor logo" }
                    } else if wants_custom {
                        div { class: "hint", "{custom_hint}" }
                    }
                }
                if wants_custom {
                    button {
                        class: "toolbar-btn",
                        id: "btn-upload-vendor-logo",
                        onclick: move |_| {
                            spawn(async move {
                                actions::upload_vendor_logo(session, settings, language, error_message).await;
                            });
                        },
                        "\u{1F4C2} {upload_logo_label}"
                    }
                }
            }

            div { class: "details-group",
                h3 { "{offer_title}" }
                for field in OfferField::all().iter().copied() {
                    div { class: "line",
                        label { class: "field-label", "{i18n::tr(current_language, field.label_key())}" }
                        input {
                            class: "toolbar-input",
                            value: "{details.offer.get(field)}",
                            oninput: move |evt| {
                                let value = evt.value();
                                session.with_mut(|session| session.details.offer.set(field, value));
                            }
                        }
                    }
                }
            }

            div { class: "details-group",
                h3 { "{project_title}" }
                div { class: "project-cells",
                    textarea {
                        class: "project-cell",
                        id: "project-left",
                        value: "{details.project_left}",
                        oninput: move |evt| {
                            let value = evt.value();
                            session.with_mut(|session| session.details.project_left = value);
                        }
                    }
                    div { class: "project-cell",
                        textarea {
                            id: "project-right",
                            value: "{details.project_right}",
                            oninput: move |evt| {
                                let value = evt.value();
                                session.with_mut(|session| session.details.project_right = value);
                            }
                        }
                        for (index, line) in details.revisions.iter().enumerate() {
                            input {
                                key: "{index}",
                                class: "toolbar-input revision-line",
                                value: "{line}",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    session.with_mut(|session| {
                                        session.details.set_revision(index, value);
                                    });
                                }
                            }
                        }
                        button {
                            class: "toolbar-btn",
                            id: "btn-add-revision",
                            onclick: move |_| {
                                session.with_mut(|session| {
                                    session.details.add_revision();
                                });
                            },
                            "\u{2795} {add_revision_label}"
                        }
                    }
                }
            }

            div { class: "details-group company-info-box",
                h3 { "{company_title}" }
                for (index, field) in details.company.iter().enumerate() {
                    div { key: "{index}", class: "line",
                        label { class: "field-label", "{field.label}" }
                        input {
                            class: "toolbar-input",
                            value: "{field.value}",
                            oninput: move |evt| {
                                let value = evt.value();
                                session.with_mut(|session| {
                                    session.details.set_company_value(index, value);
                                });
                            }
                        }
                    }
                }
            }

            div { class: "details-group",
                h3 { "{meta_title}" }
                for field in MetaField::ALL {
                    div { class: "line",
                        label { class: "field-label", "{i18n::tr(current_language, field.label_key())}" }
                        input {
                            class: "toolbar-input",
                            value: "{field.value(&details.meta)}",
                            oninput: move |evt| {
                                let value = evt.value();
                                session.with_mut(|session| *field.slot(&mut session.details.meta) = value);
                            }
                        }
                    }
                }
            }

            div { class: "details-group",
                h3 { "{bom_title}" }
                textarea {
                    class: "bom-content",
                    id: "body-content",
                    placeholder: "{bom_placeholder}",
                    value: "{bom_text}",
                    oninput: move |evt| {
                        let value = evt.value();
                        session.with_mut(|session| session.bom_text = value);
                    }
                }
            }
        }
    }
}
