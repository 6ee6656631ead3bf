//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// `jwt_secret` deliberately has no default: the signing key must come from
/// configuration or the environment, never from source code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Bearer token validity window in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u64,
}

fn default_token_ttl_days() -> u64 {
    7
}
