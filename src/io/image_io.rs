use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::state::gallery::ImageUpload;

const LOGO_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/svg+xml"];

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("File \"{name}\" is too large! Maximum size is {}.", format_limit(.limit))]
    TooLarge { name: String, limit: u64 },
    #[error("File \"{name}\" is not a valid image.")]
    NotAnImage { name: String },
    #[error("Invalid file type for \"{name}\". Please upload PNG, JPG, or SVG files only.")]
    UnsupportedLogoType { name: String },
    #[error("Could not read \"{name}\": {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

/// Reads a project image. Size is checked before type, then the bytes are
/// embedded as a data URL.
pub fn load_image(path: &Path, max_bytes: u64) -> Result<ImageUpload, ImageError> {
    let name = file_name(path);
    let size = fs::metadata(path)
        .map_err(|source| ImageError::Io {
            name: name.clone(),
            source,
        })?
        .len();
    if size > max_bytes {
        return Err(ImageError::TooLarge {
            name,
            limit: max_bytes,
        });
    }
    let Some(mime) = mime_for_path(path) else {
        return Err(ImageError::NotAnImage { name });
    };

    let bytes = fs::read(path).map_err(|source| ImageError::Io {
        name: name.clone(),
        source,
    })?;
    Ok(ImageUpload {
        name,
        size,
        mime: mime.to_string(),
        data_url: data_url(mime, &bytes),
    })
}

/// Vendor logos accept a narrower set of formats than project images.
pub fn load_logo(path: &Path, max_bytes: u64) -> Result<ImageUpload, ImageError> {
    let upload = load_image(path, max_bytes)?;
    if !LOGO_MIME_TYPES.contains(&upload.mime.as_str()) {
        return Err(ImageError::UnsupportedLogoType { name: upload.name });
    }
    Ok(upload)
}

/// Loads every file it can; rejected files are reported individually.
pub fn load_images<P: AsRef<Path>>(
    paths: &[P],
    max_bytes: u64,
) -> (Vec<ImageUpload>, Vec<ImageError>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for path in paths {
        match load_image(path.as_ref(), max_bytes) {
            Ok(upload) => accepted.push(upload),
            Err(err) => {
                tracing::warn!(error = %err, "image rejected");
                rejected.push(err);
            }
        }
    }
    (accepted, rejected)
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_limit(bytes: &u64) -> String {
    let bytes = *bytes;
    const MB: u64 = 1024 * 1024;
    if bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
