use thiserror::Error;

use crate::settings::Settings;
use crate::state::bom::BomContent;
use crate::state::branding::LogoSource;
use crate::state::data_model::ItemColumn;
use crate::state::details::{CompanyField, OfferLines};
use crate::state::paginate::Page;
use crate::state::session::QuoteSession;
use crate::state::tax::TaxContext;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("select at least one page to include in the document")]
    NoPagesSelected,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FooterInfo {
    pub purchaser: String,
    pub quote_no: String,
    pub project_name: String,
    pub quote_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverPage {
    pub offer: OfferLines,
    pub project_left: Vec<String>,
    pub project_right: Vec<String>,
}

pub type ItemPage = Page<Vec<String>, TaxContext>;

#[derive(Clone, Debug, PartialEq)]
pub enum PageContent {
    Cover(CoverPage),
    Vendor(LogoSource),
    /// `index` is 1-based among the project images.
    ProjectImage { index: usize, src: String },
    Bom(BomContent),
    ItemTable(ItemPage),
    PriceSchedule(Vec<[String; 3]>),
    CompanyDetails(Vec<CompanyField>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPage {
    pub number: usize,
    pub total: usize,
    pub content: PageContent,
    pub included: bool,
}

impl DocumentPage {
    pub fn title(&self) -> String {
        match &self.content {
            PageContent::Cover(_) => "Cover".to_string(),
            PageContent::Vendor(_) => "Vendor Details".to_string(),
            PageContent::ProjectImage { index, .. } => {
                format!("Project Description - Image {index}")
            }
            PageContent::Bom(_) => "BOM (Bill of Materials)".to_string(),
            PageContent::ItemTable(page) if page.total > 1 => {
                format!("Item List (Page {} of {})", page.number, page.total)
            }
            PageContent::ItemTable(_) => "Item List".to_string(),
            PageContent::PriceSchedule(_) => "Price Schedule & Commercial Terms".to_string(),
            PageContent::CompanyDetails(_) => "Company Information".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match &self.content {
            PageContent::Cover(_) => "page-cover",
            PageContent::Vendor(_) => "page-vendor",
            PageContent::ProjectImage { .. } => "page-project",
            PageContent::Bom(_) => "page-bom",
            PageContent::ItemTable(_) => "page-table",
            PageContent::PriceSchedule(_) => "page-price-schedule",
            PageContent::CompanyDetails(_) => "page-company-details",
        }
    }

    pub fn has_chrome(&self) -> bool {
        !matches!(self.content, PageContent::Cover(_))
    }

    pub fn footer_label(&self) -> String {
        format!("Page {} / {}", self.number, self.total)
    }
}

/// The full quotation, page by page, ready for preview and export.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteDocument {
    pub logo: LogoSource,
    pub contact_lines: Vec<String>,
    pub footer: FooterInfo,
    pub table_headers: Vec<String>,
    pages: Vec<DocumentPage>,
}

impl QuoteDocument {
    pub fn assemble(session: &QuoteSession, settings: &Settings) -> Self {
        let mut contents = Vec::new();

        contents.push(PageContent::Cover(CoverPage {
            offer: session.details.offer.clone(),
            project_left: session.details.project_left_lines(),
            project_right: session.details.project_right_lines(),
        }));

        if let Some(vendor) = session.branding.vendor_logo_source(&settings.assets_dir) {
            contents.push(PageContent::Vendor(vendor));
        }

        contents.extend(
            session
                .gallery
                .sources()
                .into_iter()
                .enumerate()
                .map(|(idx, src)| PageContent::ProjectImage { index: idx + 1, src }),
        );

        let bom = session.bom();
        if !bom.is_empty() {
            contents.push(PageContent::Bom(bom));
        }

        contents.extend(
            session
                .quote
                .paginate_rows(settings.page_size())
                .into_iter()
                .map(PageContent::ItemTable),
        );

        contents.push(PageContent::PriceSchedule(session.terms.export_rows()));
        contents.push(PageContent::CompanyDetails(session.details.company.clone()));

        // numbers are stamped only once the page count is final
        let total = contents.len();
        let pages = contents
            .into_iter()
            .enumerate()
            .map(|(idx, content)| DocumentPage {
                number: idx + 1,
                total,
                content,
                included: true,
            })
            .collect();

        let meta = &session.details.meta;
        Self {
            logo: session.branding.company_logo_source(&settings.assets_dir),
            contact_lines: settings.contact_lines.clone(),
            footer: FooterInfo {
                purchaser: session.details.purchaser().to_string(),
                quote_no: meta.quote_no.trim().to_string(),
                project_name: meta.project_name.trim().to_string(),
                quote_date: meta.quote_date.trim().to_string(),
            },
            table_headers: ItemColumn::all()
                .iter()
                .map(|column| column.header().to_string())
                .collect(),
            pages,
        }
    }

    pub fn pages(&self) -> &[DocumentPage] {
        &self.pages
    }

    /// The company logo followed by any vendor page logos.
    pub fn logo_sources_mut(&mut self) -> impl Iterator<Item = &mut LogoSource> + '_ {
        std::iter::once(&mut self.logo).chain(self.pages.iter_mut().filter_map(|page| {
            match &mut page.content {
                PageContent::Vendor(source) => Some(source),
                _ => None,
            }
        }))
    }

    pub fn set_included(&mut self, index: usize, included: bool) -> bool {
        match self.pages.get_mut(index) {
            Some(page) if page.included != included => {
                page.included = included;
                true
            }
            _ => false,
        }
    }

    pub fn select_all(&mut self) {
        for page in &mut self.pages {
            page.included = true;
        }
    }

    pub fn deselect_all(&mut self) {
        for page in &mut self.pages {
            page.included = false;
        }
    }

    /// Pages keep the numbers they were given at assembly time.
    pub fn included_pages(&self) -> Result<Vec<&DocumentPage>, DocumentError> {
        let pages: Vec<&DocumentPage> = self.pages.iter().filter(|page| page.included).collect();
        if pages.is_empty() {
            return Err(DocumentError::NoPagesSelected);
        }
        Ok(pages)
    }
}
