//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// Only the subject is trusted; role and permissions are always re-read from
/// the account store so that role changes and deactivation apply to tokens
/// that are already out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID (subject claim)
    pub sub: String,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}
