use crate::settings::Settings;
use crate::state::bom::BomContent;
use crate::state::branding::Branding;
use crate::state::details::QuoteDetails;
use crate::state::document::QuoteDocument;
use crate::state::gallery::ImageGallery;
use crate::state::quote_state::QuoteState;
use crate::state::terms::PriceTerms;

/// Everything the user has entered in this window. Handlers receive it by
/// reference; nothing lives in globals.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSession {
    pub quote: QuoteState,
    pub gallery: ImageGallery,
    pub branding: Branding,
    pub details: QuoteDetails,
    pub terms: PriceTerms,
    pub bom_text: String,
}

impl QuoteSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            quote: QuoteState::with_rate(settings.default_gst_rate),
            gallery: ImageGallery::new(),
            branding: Branding::new(),
            details: QuoteDetails::default(),
            terms: PriceTerms::new(),
            bom_text: String::new(),
        }
    }

    pub fn bom(&self) -> BomContent {
        BomContent::from_paste(&self.bom_text)
    }

    pub fn build_document(&self, settings: &Settings) -> QuoteDocument {
        let document = QuoteDocument::assemble(self, settings);
        tracing::info!(
            pages = document.pages().len(),
            images = self.gallery.len(),
            "quotation document assembled"
        );
        document
    }
}
