use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::categories::{AllCategoriesRequest, Category};
use crate::config::Config;
use crate::constants::MAX_LIMIT;
use crate::error::{ClientError, Result};
use crate::pages::{AllPagesRequest, Page};
use crate::types::{ListModule, ListResponse};

/// Client for the Action API list modules. Holds the endpoint and the
/// underlying HTTP client; carries no other state between calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

/// Raw shape of a list-module response body. The module-specific pieces
/// (result array key, continuation key) are resolved per [`ListModule`].
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    batchcomplete: Option<serde_json::Value>,
    #[serde(rename = "continue", default)]
    continuation: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    query: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Client {
    /// Creates a client for the given Action API endpoint.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_config(&Config {
            endpoint: endpoint.to_string(),
            timeout_seconds: None,
        })
    }

    /// Creates a client from a full [`Config`]. The endpoint is parsed up
    /// front so a malformed URL fails here rather than on first use.
    pub fn with_config(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            ClientError::Config(format!("invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    /// Fetches one page of results from a list module: validates the
    /// request, issues exactly one GET, and decodes the body. Never loops;
    /// following the continuation token is the caller's job.
    #[instrument(skip(self, request), fields(module = M::MODULE))]
    pub async fn list<M: ListModule>(&self, request: &M) -> Result<ListResponse<M::Item>> {
        if let Some(limit) = request.limit() {
            if limit > MAX_LIMIT {
                return Err(ClientError::LimitTooHigh(limit));
            }
        }

        let mut params: Vec<(&str, String)> = vec![
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("list", M::MODULE.to_string()),
        ];
        params.extend(request.query_params());

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await?;
        debug!(status = %response.status(), "query dispatched");

        // Consume the whole body before decoding so the connection is
        // released even when the decode fails.
        let body = response.bytes().await?;
        decode::<M>(&body)
    }

    /// Fetches one page of titles from the `allpages` module.
    pub async fn list_all_pages(&self, request: &AllPagesRequest) -> Result<ListResponse<Page>> {
        self.list(request).await
    }

    /// Fetches one page of category names from the `allcategories` module.
    pub async fn list_all_categories(
        &self,
        request: &AllCategoriesRequest,
    ) -> Result<ListResponse<Category>> {
        self.list(request).await
    }
}

fn decode<M: ListModule>(body: &[u8]) -> Result<ListResponse<M::Item>> {
    let wire: WireResponse = serde_json::from_slice(body)?;

    // The server omits `query` entirely for an empty result set.
    let items = match wire.query.and_then(|mut query| query.remove(M::MODULE)) {
        Some(value) => serde_json::from_value(value)?,
        None => Vec::new(),
    };

    // An absent `continue` object and an empty token both mean Done.
    let continuation = wire
        .continuation
        .as_ref()
        .and_then(|c| c.get(M::CONTINUE_KEY))
        .and_then(|v| v.as_str())
        .filter(|token| !token.is_empty())
        .map(str::to_owned);

    Ok(ListResponse {
        batch_complete: wire.batchcomplete.is_some(),
        items,
        continuation,
    })
}
