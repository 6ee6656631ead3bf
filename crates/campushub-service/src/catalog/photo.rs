//! Photo storage and URL materialization.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use uuid::Uuid;

use campushub_core::error::AppError;

/// Stores uploaded event photos and resolves stored filenames to URLs.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    /// Directory uploaded photos are written to.
    directory: PathBuf,
    /// Public origin prefixed onto stored filenames at read time.
    public_url: String,
}

impl PhotoStore {
    /// Creates a new photo store.
    pub fn new(directory: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            public_url: public_url.into(),
        }
    }

    /// Persist uploaded photo bytes under a generated filename.
    ///
    /// The original filename only contributes its extension; the stored name
    /// is a fresh UUID so uploads can never collide or traverse paths.
    pub async fn save(&self, original_name: &str, data: Bytes) -> Result<String, AppError> {
        let stored_name = generate_filename(original_name);
        let path = self.directory.join(&stored_name);

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&path, &data).await?;

        Ok(stored_name)
    }

    /// Resolve a stored filename to an absolute URL.
    ///
    /// An absent reference stays absent: `None`, never an empty string.
    pub fn resolve_url(&self, stored: Option<&str>) -> Option<String> {
        stored.map(|name| format!("{}/uploads/{}", self.public_url.trim_end_matches('/'), name))
    }
}

/// Build a stored filename: a random UUID keeping the original extension.
fn generate_filename(original_name: &str) -> String {
    match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}
