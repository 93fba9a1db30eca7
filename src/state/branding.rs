use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::gallery::ImageUpload;

pub const OTHER_VENDOR_ID: &str = "other";
pub const COMPANY_LOGO_DIR: &str = "sta-logo";
pub const VENDOR_LOGO_DIR: &str = "vendor-logo";
const LOGO_SUFFIX: &str = "-logo.png";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub filename: Option<String>,
}

impl VendorEntry {
    /// Manifest entries without a name are labelled from their id.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format_vendor_name(&self.id)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VendorCatalog {
    #[serde(default)]
    pub vendors: Vec<VendorEntry>,
}

impl VendorCatalog {
    /// Used when no manifest can be read.
    pub fn fallback() -> Self {
        Self {
            vendors: vec![
                VendorEntry {
                    id: "rockwell-automation".to_string(),
                    name: "Rockwell Automation".to_string(),
                    filename: Some("rockwell-automation-logo.png".to_string()),
                },
                VendorEntry {
                    id: OTHER_VENDOR_ID.to_string(),
                    name: "Other (Upload Custom Logo)".to_string(),
                    filename: None,
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&VendorEntry> {
        self.vendors.iter().find(|vendor| vendor.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum VendorChoice {
    #[default]
    None,
    Catalog(String),
    /// "Other" was picked; the logo stays empty until one is uploaded.
    Custom(Option<ImageUpload>),
}

/// Where a logo image comes from when the document is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoSource {
    File(PathBuf),
    /// A ready-to-use `src`: a data URL, or a path when the file was unreadable.
    Embedded(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Branding {
    company_logo: Option<String>,
    vendor: VendorChoice,
}

impl Branding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_logo(&self) -> Option<&str> {
        self.company_logo.as_deref()
    }

    /// An empty name clears the selection.
    pub fn select_company_logo(&mut self, name: &str) {
        let name = name.trim();
        self.company_logo = (!name.is_empty()).then(|| name.to_string());
    }

    pub fn vendor(&self) -> &VendorChoice {
        &self.vendor
    }

    pub fn select_vendor(&mut self, id: &str) {
        let id = id.trim();
        self.vendor = match id {
            "" => VendorChoice::None,
            OTHER_VENDOR_ID => VendorChoice::Custom(None),
            other => VendorChoice::Catalog(other.to_string()),
        };
    }

    /// Only meaningful once "Other" has been chosen.
    pub fn set_custom_vendor_logo(&mut self, upload: ImageUpload) -> bool {
        match &mut self.vendor {
            VendorChoice::Custom(slot) => {
                *slot = Some(upload);
                true
            }
            _ => false,
        }
    }

    pub fn wants_custom_upload(&self) -> bool {
        matches!(self.vendor, VendorChoice::Custom(_))
    }

    pub fn vendor_dropdown_value(&self) -> &str {
        match &self.vendor {
            VendorChoice::None => "",
            VendorChoice::Catalog(id) => id,
            VendorChoice::Custom(_) => OTHER_VENDOR_ID,
        }
    }

    pub fn company_logo_source(&self, assets_dir: &Path) -> LogoSource {
        LogoSource::File(company_logo_path(assets_dir, self.company_logo.as_deref()))
    }

    /// `None` when no vendor page should be produced.
    pub fn vendor_logo_source(&self, assets_dir: &Path) -> Option<LogoSource> {
        match &self.vendor {
            VendorChoice::None => None,
            VendorChoice::Catalog(id) => Some(LogoSource::File(vendor_logo_path(assets_dir, id))),
            VendorChoice::Custom(upload) => upload
                .as_ref()
                .map(|upload| LogoSource::Embedded(upload.data_url.clone())),
        }
    }
}

pub fn company_logo_path(assets_dir: &Path, name: Option<&str>) -> PathBuf {
    let file = match name {
        Some(name) => format!("{name}{LOGO_SUFFIX}"),
        None => "sta-logo.png".to_string(),
    };
    assets_dir.join(COMPANY_LOGO_DIR).join(file)
}

pub fn vendor_logo_path(assets_dir: &Path, id: &str) -> PathBuf {
    assets_dir
        .join(VENDOR_LOGO_DIR)
        .join(format!("{id}{LOGO_SUFFIX}"))
}

/// Strips the `-logo.png` suffix from a logo file name.
pub fn logo_name_from_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(LOGO_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// "abc-company" becomes "Abc Company".
pub fn format_vendor_name(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn company_logo_display_name(name: &str) -> String {
    name.to_uppercase()
}
