use dioxus::prelude::*;

use crate::io::manifest_io;
use crate::settings::Settings;
use crate::state::branding::VendorCatalog;
use crate::state::document::QuoteDocument;
use crate::state::i18n::Language;
use crate::state::session::QuoteSession;
use crate::ui::details::DetailsPanel;
use crate::ui::gallery::Gallery;
use crate::ui::preview::Preview;
use crate::ui::table::ItemTable;
use crate::ui::tax_panel::TaxPanel;
use crate::ui::terms::TermsPanel;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let settings = use_signal(Settings::load);
    let session = use_signal(|| QuoteSession::new(&settings.read()));
    let language =
        use_signal(|| Language::from_code(&settings.read().language).unwrap_or_default());
    let error_message = use_signal::<Option<String>>(|| None);
    let notice = use_signal::<Option<String>>(|| None);
    let selected_row = use_signal::<Option<usize>>(|| None);
    let preview = use_signal::<Option<QuoteDocument>>(|| None);
    let vendors = use_signal(VendorCatalog::default);
    let company_logos = use_signal(Vec::<String>::new);

    use_effect({
        let mut vendors = vendors;
        let mut company_logos = company_logos;
        move || {
            let assets_dir = settings.peek().assets_dir.clone();
            vendors.set(manifest_io::load_vendor_catalog(&assets_dir));
            match manifest_io::scan_company_logos(&assets_dir) {
                Ok(names) => company_logos.set(names),
                Err(err) => {
                    tracing::warn!(
                        dir = %assets_dir.display(),
                        error = %err,
                        "company logos not found"
                    );
                    company_logos.set(Vec::new());
                }
            }
        }
    });

    let previewing = preview.read().is_some();

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            if previewing {
                Preview { preview, language, error_message, notice }
            } else {
                Toolbar { session, settings, language, error_message, notice, selected_row, preview }
                div { class: "builder",
                    DetailsPanel { session, settings, language, error_message, vendors, company_logos }
                    Gallery { session, settings, language, error_message }
                    ItemTable { session, language, selected_row }
                    TaxPanel { session, language }
                    TermsPanel { session, language }
                }
            }
        }
    }
}
