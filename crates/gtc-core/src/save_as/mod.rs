//! Attachment naming and save-to-disk.
//!
//! Derives the local filename from the `content-disposition` header,
//! sanitizes it for Linux filesystems, and writes the payload via a `.part`
//! temp file renamed into place.

mod filename;
mod sanitize;

pub use filename::filename_from_disposition;
pub use sanitize::sanitize_filename;

use crate::error::ClientError;
use crate::headers::HeaderMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback when the header yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// A download written to disk.
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub path: PathBuf,
    pub filename: String,
    pub content_type: Option<String>,
}

/// Derive the save name for a response: `content-disposition` filename,
/// sanitized, with `download.bin` as the last resort.
pub fn derive_filename(headers: &HeaderMap) -> Result<String, ClientError> {
    let disposition = headers
        .content_disposition()
        .ok_or(ClientError::MissingHeader("content-disposition"))?;
    let raw = filename_from_disposition(disposition)
        .ok_or(ClientError::MissingHeader("content-disposition"))?;
    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        Ok(DEFAULT_FILENAME.to_string())
    } else {
        Ok(sanitized)
    }
}

/// Save `payload` under the response's attachment name in `dir`.
/// Writes `<name>.part` first and renames into place.
pub fn save_attachment(
    dir: &Path,
    headers: &HeaderMap,
    payload: &[u8],
) -> Result<SavedFile, ClientError> {
    let filename = derive_filename(headers)?;
    let final_path = dir.join(&filename);
    let temp_path = dir.join(format!("{filename}.part"));

    fs::write(&temp_path, payload)?;
    fs::rename(&temp_path, &final_path)?;
    tracing::info!(
        path = %final_path.display(),
        bytes = payload.len(),
        "saved attachment"
    );

    Ok(SavedFile {
        path: final_path,
        filename,
        content_type: headers.content_type().map(|s| s.to_string()),
    })
}
