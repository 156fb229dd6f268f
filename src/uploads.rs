//! Product photo storage
//!
//! Uploaded photos land in the configured upload directory under a fresh
//! `{uuid}.{ext}` name and are served back via the static `/uploads`
//! route. Only common web image formats are accepted.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Extensions accepted for product photos
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Errors from photo validation and storage
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type: {0}. Use: jpg, jpeg, png, or webp")]
    UnsupportedType(String),

    #[error("File too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("File is not a valid image")]
    NotAnImage,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// An uploaded photo, fully read into memory
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Client-supplied filename; only its extension is kept
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Saves and removes product photos under the configured directory
pub struct Uploads {
    dir: PathBuf,
    max_bytes: u64,
}

impl Uploads {
    pub fn new(dir: impl Into<PathBuf>, max_upload_mb: u32) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: u64::from(max_upload_mb) * 1024 * 1024,
        }
    }

    /// Create the upload directory if it does not exist yet
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Validate and persist a photo; returns the stored filename
    ///
    /// The payload must fit the size cap, carry an allowed extension, and
    /// sniff as a real image.
    pub fn save(&self, photo: &PhotoUpload) -> Result<String, UploadError> {
        let size = photo.bytes.len() as u64;
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let extension = photo
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedType(extension));
        }

        if image::guess_format(&photo.bytes).is_err() {
            return Err(UploadError::NotAnImage);
        }

        let stored = format!("{}.{}", Uuid::new_v4(), extension);
        fs::write(self.dir.join(&stored), &photo.bytes)?;

        debug!(filename = %stored, size, "save: photo stored");
        Ok(stored)
    }

    /// Remove a stored photo, best effort
    ///
    /// Missing files are fine; other failures are logged and swallowed so
    /// record deletion never fails over a stray file.
    pub fn remove(&self, filename: &str) {
        let path = self.dir.join(filename);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Failed to remove photo {}: {}", path.display(), e);
            }
        }
    }
}
