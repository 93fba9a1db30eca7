use std::num::NonZeroUsize;
use std::path::Path;

use quotesheet::io::preview_io::{self, ExportError};
use quotesheet::settings::Settings;
use quotesheet::state::branding::LogoSource;
use quotesheet::state::data_model::ItemColumn;
use quotesheet::state::document::{DocumentError, PageContent, QuoteDocument};
use quotesheet::state::paginate::{paginate, PageBody};
use quotesheet::state::session::QuoteSession;
use quotesheet::state::tax::recompute_tax;

fn document_in(assets: &Path, edit: impl FnOnce(&mut QuoteSession)) -> QuoteDocument {
    let settings = Settings {
        assets_dir: assets.to_path_buf(),
        ..Settings::default()
    };
    let mut session = QuoteSession::new(&settings);
    edit(&mut session);
    session.build_document(&settings)
}

fn page_html(document: &QuoteDocument, css_class: &str) -> String {
    let page = document
        .pages()
        .iter()
        .find(|page| page.css_class() == css_class)
        .unwrap();
    preview_io::render_page(document, page, "logo.png").unwrap()
}

#[test]
fn test_markup_in_details_is_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_in(dir.path(), |session| {
        session.details.offer.type_of_work = r#"<b>"Tom" & Jerry"#.to_string();
        session.details.meta.project_name = "<i>Plant".to_string();
    });

    let cover = page_html(&document, "page-cover");
    assert!(cover.contains("&lt;b&gt;&quot;Tom&quot; &amp; Jerry"));
    assert!(!cover.contains("<b>"));

    let details = page_html(&document, "page-company-details");
    assert!(details.contains("Project Name: &lt;i&gt;Plant"));
    assert!(!details.contains("<i>"));
}

#[test]
fn test_user_text_is_escaped_in_table() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_in(dir.path(), |session| {
        session
            .quote
            .set_cell_from_input(0, ItemColumn::Description, "<script>alert(1)</script>");
    });

    let html = page_html(&document, "page-table");
    assert!(html.contains("&lt;script&gt;alert(1)"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_gst_block_spans_half_the_columns() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_in(dir.path(), |_| {});

    let html = page_html(&document, "page-table");
    assert!(html.contains(r#"<tbody class="gst-section-pdf">"#));
    assert!(html.contains(r#"<td colspan="5" class="gst-label">Taxable Amount</td>"#));
    assert!(html.contains(r#"<td colspan="6" class="gst-value">0.00</td>"#));
    assert!(html.contains("Grand Total (incl. GST)"));
}

#[test]
fn test_empty_item_page_shows_placeholder_and_summary() {
    let headers: Vec<String> = ItemColumn::all()
        .iter()
        .map(|column| column.header().to_string())
        .collect();
    let rows: Vec<Vec<String>> = Vec::new();
    let pages = paginate(&rows, NonZeroUsize::new(18).unwrap(), recompute_tax([], 18.0, false));
    assert_eq!(pages.len(), 1);
    assert!(matches!(pages[0].body, PageBody::NoItems));

    let html = preview_io::render_item_table(&headers, &pages[0]).unwrap();
    assert!(html.contains(r#"<td colspan="11">(No items)</td>"#));
    assert!(html.contains(r#"<tbody class="gst-section-pdf">"#));
    assert!(html.contains(r#"<td colspan="6" class="gst-value">0.00</td>"#));
    assert_eq!(html.matches("<tr>").count(), 2 + 8);
}

#[test]
fn test_embed_logos_inlines_company_and_vendor_files() {
    let dir = tempfile::tempdir().unwrap();
    let company = dir.path().join("sta-logo");
    let vendor = dir.path().join("vendor-logo");
    std::fs::create_dir_all(&company).unwrap();
    std::fs::create_dir_all(&vendor).unwrap();
    std::fs::write(company.join("sta-logo.png"), b"png").unwrap();
    std::fs::write(vendor.join("rockwell-automation-logo.png"), b"png").unwrap();

    let mut document = document_in(dir.path(), |session| {
        session.branding.select_vendor("rockwell-automation");
    });
    assert!(matches!(document.logo, LogoSource::File(_)));

    preview_io::embed_logos(&mut document);
    let embedded = LogoSource::Embedded("data:image/png;base64,cG5n".to_string());
    assert_eq!(document.logo, embedded);
    let vendor_page = document
        .pages()
        .iter()
        .find_map(|page| match &page.content {
            PageContent::Vendor(source) => Some(source.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(vendor_page, embedded);

    // later renders no longer touch the files
    std::fs::remove_dir_all(&vendor).unwrap();
    assert!(page_html(&document, "page-vendor").contains("base64,cG5n"));
}

#[test]
fn test_cover_has_no_header_or_footer() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_in(dir.path(), |session| {
        session.details.offer.type_of_work = "Automation & Control".to_string();
    });

    let html = page_html(&document, "page-cover");
    assert!(html.contains("Automation &amp; Control"));
    assert!(!html.contains(r#"class="footer""#));
    assert!(!html.contains(r#"class="header""#));
}

#[test]
fn test_chrome_pages_show_contact_lines_and_footer() {
    let dir = tempfile::tempdir().unwrap();
    let document = document_in(dir.path(), |session| {
        session.details.meta.project_name = "Line 3".to_string();
    });

    let html = page_html(&document, "page-company-details");
    assert!(html.contains("www.startrackautomation.in"));
    assert!(html.contains("Project Name: Line 3"));
    assert!(html.contains("Page 4 / 4"));
    assert!(html.contains("Company Information"));
}

#[test]
fn test_missing_logo_file_keeps_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");
    assert_eq!(
        preview_io::logo_src(&LogoSource::File(path.clone())),
        path.display().to_string()
    );
}

#[test]
fn test_logo_file_is_inlined() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, b"png").unwrap();
    assert_eq!(
        preview_io::logo_src(&LogoSource::File(path)),
        "data:image/png;base64,cG5n"
    );
}

#[test]
fn test_export_writes_only_included_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = document_in(dir.path(), |_| {});
    document.set_included(2, false);

    let out = dir.path().join("quotation.html");
    preview_io::export_document(&out, &document).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(".a4page"));
    assert!(html.contains("page-cover"));
    assert!(html.contains("page-table"));
    assert!(!html.contains("page-price-schedule"));
    assert!(html.contains("Page 4 / 4"));
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("quotation.html");
    std::fs::write(&out, "old").unwrap();

    let document = document_in(dir.path(), |_| {});
    preview_io::export_document(&out, &document).unwrap();
    assert_ne!(std::fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_export_without_pages_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = document_in(dir.path(), |_| {});
    document.deselect_all();

    let out = dir.path().join("quotation.html");
    let err = preview_io::export_document(&out, &document).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Document(DocumentError::NoPagesSelected)
    ));
    assert!(!out.exists());
}
