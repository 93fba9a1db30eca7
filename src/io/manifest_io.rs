use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::state::branding::{self, VendorCatalog, COMPANY_LOGO_DIR, VENDOR_LOGO_DIR};

pub const VENDOR_MANIFEST: &str = "vendors-manifest.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("vendor manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_vendor_manifest(path: &Path) -> Result<VendorCatalog, ManifestError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads `vendor-logo/vendors-manifest.json`, or the built-in list when the
/// manifest is missing or broken.
pub fn load_vendor_catalog(assets_dir: &Path) -> VendorCatalog {
    let path = assets_dir.join(VENDOR_LOGO_DIR).join(VENDOR_MANIFEST);
    match load_vendor_manifest(&path) {
        Ok(catalog) => {
            tracing::info!(vendors = catalog.vendors.len(), "vendor manifest loaded");
            catalog
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "vendor manifest not available, using built-in list"
            );
            VendorCatalog::fallback()
        }
    }
}

/// Company logo names found in `sta-logo/` as `{name}-logo.png`, sorted.
pub fn scan_company_logos(assets_dir: &Path) -> Result<Vec<String>, ManifestError> {
    let dir = assets_dir.join(COMPANY_LOGO_DIR);
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str().and_then(branding::logo_name_from_file) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
