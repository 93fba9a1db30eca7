// Application settings
// Loaded from ~/.config/quotesheet/settings.json, or from the file named by
// QUOTESHEET_SETTINGS.

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SETTINGS_ENV: &str = "QUOTESHEET_SETTINGS";
pub const DEFAULT_ROWS_PER_PAGE: usize = 18;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Item rows per printed table page
    #[serde(rename = "table.rowsPerPage")]
    pub rows_per_page: usize,

    /// GST rate (%) a new quotation starts with
    #[serde(rename = "tax.defaultRate")]
    pub default_gst_rate: f64,

    #[serde(rename = "upload.maxBytes")]
    pub max_upload_bytes: u64,

    /// Folder holding sta-logo/ and vendor-logo/
    #[serde(rename = "assets.dir")]
    pub assets_dir: PathBuf,

    /// Right-hand lines of every page header
    #[serde(rename = "header.contactLines")]
    pub contact_lines: Vec<String>,

    #[serde(rename = "ui.language")]
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            default_gst_rate: 18.0,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            assets_dir: PathBuf::from("assets"),
            contact_lines: vec![
                "www.startrackautomation.in".to_string(),
                "8101274497".to_string(),
                "startrackautomation@gmail.com".to_string(),
            ],
            language: "en".to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(SETTINGS_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotesheet")
            .join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write_string(path, &json)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// A zero in the file means the default page size.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.rows_per_page)
            .or_else(|| NonZeroUsize::new(DEFAULT_ROWS_PER_PAGE))
            .unwrap_or(NonZeroUsize::MIN)
    }
}
