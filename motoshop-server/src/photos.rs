//! Directory-backed photo store
//!
//! Uploads are written under a generated name (uuid v4 plus the original
//! extension) and read back by that name. Lookups are confined to the upload
//! directory: a name must be a single plain path component.

use std::path::{Component, Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// URL prefix under which stored photos are referenced
pub const PHOTO_URL_PREFIX: &str = "/uploads";

/// Longest extension kept from an uploaded filename
const MAX_EXTENSION_LEN: usize = 10;

/// Photo store error type
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("photo '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A photo read back from the store
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl StoredPhoto {
    /// Best-effort MIME type from the file extension.
    pub fn content_type(&self) -> &'static str {
        let ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("heic") => "image/heic",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

/// Photo store rooted at an upload directory
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the uploaded files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist.
    pub async fn ensure_dir(&self) -> Result<(), PhotoError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write `bytes` under a freshly generated name.
    ///
    /// Returns the reference path, e.g. `/uploads/3f2a...c1.jpg`.
    pub async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String, PhotoError> {
        let filename = generate_filename(original_filename);
        self.ensure_dir().await?;
        fs::write(self.root.join(&filename), bytes).await?;

        tracing::info!(%filename, size = bytes.len(), "Stored photo");
        Ok(format!("{}/{}", PHOTO_URL_PREFIX, filename))
    }

    /// Read a stored photo by its generated name.
    pub async fn retrieve(&self, filename: &str) -> Result<StoredPhoto, PhotoError> {
        let Some(path) = self.resolve(filename) else {
            tracing::warn!(%filename, "Rejected photo name outside upload directory");
            return Err(PhotoError::NotFound(filename.to_owned()));
        };

        // a directory or other non-file entry under the name is not a photo
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(PhotoError::NotFound(filename.to_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PhotoError::NotFound(filename.to_owned()));
            }
            Err(e) => return Err(e.into()),
        }

        let bytes = fs::read(&path).await?;
        Ok(StoredPhoto {
            filename: filename.to_owned(),
            bytes,
        })
    }

    /// Map a lookup name to a path inside the root, or None if it would escape.
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !filename.contains('\\') => {
                Some(self.root.join(name))
            }
            _ => None,
        }
    }
}

/// Build `<uuid>.<ext>` from the uploaded filename's final dot segment.
fn generate_filename(original_filename: &str) -> String {
    let id = Uuid::new_v4().simple();
    match extension_of(original_filename) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

fn extension_of(original_filename: &str) -> Option<String> {
    let (_, ext) = original_filename.rsplit_once('.')?;
    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}
