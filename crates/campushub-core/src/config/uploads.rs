//! Event photo upload configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded event photos land on disk and how large requests may be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory for uploaded photos, served statically under `/uploads`.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Maximum accepted request body size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_directory() -> String {
    "data/uploads".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}
