//! Photo file → embedded data URL.
//!
//! Submitted photos are carried through the session as self-contained
//! `data:{mime};base64,{payload}` strings, so views and exports never touch
//! the filesystem again. Pixels are never decoded; the media type is sniffed
//! from the file's magic bytes, falling back to its extension.
//!
//! Encoding failures never block a submission. The `*_or_unset` helpers log
//! the failure and leave the field empty. A gallery batch is all-or-nothing:
//! if one photo fails, none of the batch is kept.

use base64::{Engine, engine::general_purpose};
use image::ImageFormat;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("{0} is not a recognized image")]
    UnknownFormat(PathBuf),
}

/// Read an image file and encode it as a data URL.
pub fn encode_image_file(path: &Path, max_bytes: u64) -> Result<String, EncodeError> {
    let io_err = |source: std::io::Error| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(EncodeError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path).map_err(io_err)?;
    let format = image::guess_format(&bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
        .ok_or_else(|| EncodeError::UnknownFormat(path.to_path_buf()))?;

    Ok(data_url(format.to_mime_type(), &bytes))
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Encode a single optional photo, logging and dropping it on failure.
pub fn encode_or_unset(path: Option<&Path>, field: &str, max_bytes: u64) -> Option<String> {
    let path = path?;
    match encode_image_file(path, max_bytes) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("{field}: {e}; leaving it unset");
            None
        }
    }
}

/// Encode a batch of gallery photos in parallel, preserving their order.
///
/// Returns an empty list if any photo fails.
pub fn encode_gallery_or_unset(paths: &[PathBuf], max_bytes: u64) -> Vec<String> {
    let encoded: Result<Vec<String>, EncodeError> = paths
        .par_iter()
        .map(|p| encode_image_file(p, max_bytes))
        .collect();

    match encoded {
        Ok(urls) => urls,
        Err(e) => {
            log::warn!("gallery_photos: {e}; leaving the gallery batch unset");
            Vec::new()
        }
    }
}
