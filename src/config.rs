use serde::Deserialize;

use crate::constants::DEFAULT_ENDPOINT;

/// Client configuration. The endpoint is injected here rather than read
/// from a hardcoded literal at call sites, so tests can point the client
/// at a local listener.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Action API, e.g. `https://www.mediawiki.org/w/api.php`.
    pub endpoint: String,

    /// Per-request timeout. `None` blocks until the transport completes
    /// or errors, matching the API's documented default behavior.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}
