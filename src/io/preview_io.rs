use std::fs;
use std::io;
use std::path::Path;

use askama::Template;
use thiserror::Error;

use crate::io::atomic_write_string;
use crate::io::image_io;
use crate::state::bom::BomContent;
use crate::state::branding::LogoSource;
use crate::state::details::{CompanyField, OfferLines};
use crate::state::document::{
    DocumentError, DocumentPage, FooterInfo, ItemPage, PageContent, QuoteDocument,
};
use crate::state::paginate::PageBody;
use crate::state::tax::SummaryLine;

const PAGE_STYLES: &str = include_str!("../../assets/document.css");

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Template)]
#[template(path = "quote/document.html")]
struct DocumentTemplate<'a> {
    styles: &'a str,
    pages: Vec<String>,
}

struct Chrome<'a> {
    logo: &'a str,
    title: String,
    contact_lines: &'a [String],
    footer: &'a FooterInfo,
    number: usize,
    total: usize,
}

/// A4 frame. The cover has no header or footer.
#[derive(Template)]
#[template(path = "quote/page.html")]
struct PageTemplate<'a> {
    css_class: &'a str,
    chrome: Option<Chrome<'a>>,
    body: String,
}

#[derive(Template)]
#[template(path = "quote/cover.html")]
struct CoverTemplate<'a> {
    logo: &'a str,
    offer: &'a OfferLines,
    project_left: &'a [String],
    project_right: &'a [String],
}

#[derive(Template)]
#[template(path = "quote/vendor.html")]
struct VendorTemplate<'a> {
    src: &'a str,
}

#[derive(Template)]
#[template(path = "quote/project_image.html")]
struct ProjectImageTemplate<'a> {
    index: usize,
    src: &'a str,
}

#[derive(Template)]
#[template(path = "quote/bom.html")]
struct BomTemplate<'a> {
    header: &'a [String],
    rows: &'a [Vec<String>],
    text_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "quote/item_table.html")]
struct ItemTableTemplate<'a> {
    headers: &'a [String],
    rows: &'a [Vec<String>],
    no_items: bool,
    summary: Vec<SummaryLine>,
    label_span: usize,
    value_span: usize,
}

#[derive(Template)]
#[template(path = "quote/price_schedule.html")]
struct PriceScheduleTemplate<'a> {
    rows: &'a [[String; 3]],
}

#[derive(Template)]
#[template(path = "quote/company_details.html")]
struct CompanyDetailsTemplate<'a> {
    fields: &'a [CompanyField],
}

/// Image `src` for a logo. Files are inlined so the exported document does
/// not depend on the assets folder; unreadable files keep their path.
pub fn logo_src(source: &LogoSource) -> String {
    match source {
        LogoSource::Embedded(src) => src.clone(),
        LogoSource::File(path) => {
            let mime = image_io::mime_for_path(path).unwrap_or("image/png");
            match fs::read(path) {
                Ok(bytes) => image_io::data_url(mime, &bytes),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "logo not found");
                    path.display().to_string()
                }
            }
        }
    }
}

/// Reads every logo file of the document once, so later renders only
/// copy strings.
pub fn embed_logos(document: &mut QuoteDocument) {
    for source in document.logo_sources_mut() {
        if matches!(source, LogoSource::File(_)) {
            *source = LogoSource::Embedded(logo_src(source));
        }
    }
}

/// Renders one page to an HTML fragment. `logo` is the resolved company
/// logo `src`.
pub fn render_page(
    document: &QuoteDocument,
    page: &DocumentPage,
    logo: &str,
) -> Result<String, ExportError> {
    let body = match &page.content {
        PageContent::Cover(cover) => CoverTemplate {
            logo,
            offer: &cover.offer,
            project_left: &cover.project_left,
            project_right: &cover.project_right,
        }
        .render()?,
        PageContent::Vendor(source) => VendorTemplate {
            src: &logo_src(source),
        }
        .render()?,
        PageContent::ProjectImage { index, src } => ProjectImageTemplate { index: *index, src }.render()?,
        PageContent::Bom(bom) => render_bom(bom)?,
        PageContent::ItemTable(item_page) => render_item_table(&document.table_headers, item_page)?,
        PageContent::PriceSchedule(rows) => PriceScheduleTemplate { rows }.render()?,
        PageContent::CompanyDetails(fields) => CompanyDetailsTemplate { fields }.render()?,
    };

    let chrome = page.has_chrome().then(|| Chrome {
        logo,
        title: header_title(page),
        contact_lines: &document.contact_lines,
        footer: &document.footer,
        number: page.number,
        total: page.total,
    });

    Ok(PageTemplate {
        css_class: page.css_class(),
        chrome,
        body,
    }
    .render()?)
}

/// One item table page; the GST block splits the width into a label half
/// (rounded down) and a value half.
pub fn render_item_table(headers: &[String], page: &ItemPage) -> Result<String, ExportError> {
    let label_span = headers.len() / 2;
    Ok(ItemTableTemplate {
        headers,
        rows: page.rows(),
        no_items: matches!(page.body, PageBody::NoItems),
        summary: page
            .summary
            .map(|tax| tax.summary_lines())
            .unwrap_or_default(),
        label_span,
        value_span: headers.len() - label_span,
    }
    .render()?)
}

/// Full standalone HTML of the included pages.
pub fn render_document(document: &QuoteDocument) -> Result<String, ExportError> {
    let included = document.included_pages()?;
    let logo = logo_src(&document.logo);

    let pages = included
        .into_iter()
        .map(|page| render_page(document, page, &logo))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DocumentTemplate {
        styles: PAGE_STYLES,
        pages,
    }
    .render()?)
}

pub fn export_document(path: &Path, document: &QuoteDocument) -> Result<(), ExportError> {
    let html = render_document(document)?;
    atomic_write_string(path, &html)?;
    tracing::info!(
        path = %path.display(),
        pages = document.included_pages()?.len(),
        "quotation exported"
    );
    Ok(())
}

fn header_title(page: &DocumentPage) -> String {
    match &page.content {
        PageContent::ItemTable(_) | PageContent::PriceSchedule(_) | PageContent::CompanyDetails(_) => {
            page.title()
        }
        _ => String::new(),
    }
}

fn render_bom(bom: &BomContent) -> Result<String, ExportError> {
    let template = match bom {
        BomContent::Empty => BomTemplate {
            header: &[],
            rows: &[],
            text_lines: Vec::new(),
        },
        BomContent::Text(text) => BomTemplate {
            header: &[],
            rows: &[],
            text_lines: text.lines().collect(),
        },
        BomContent::Table { header, rows } => BomTemplate {
            header,
            rows,
            text_lines: Vec::new(),
        },
    };
    Ok(template.render()?)
}
