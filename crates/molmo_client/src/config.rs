//! Client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the query client.
///
/// The bearer token is passed in explicitly; the library never reads
/// the environment. The CLI layer decides where the secret comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
}

impl ClientConfig {
    /// Create a new ClientConfig with the given bearer token
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}
