/// Blocking HTTP client for the paginated listing endpoints.
use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use super::config::ClientConfig;
use super::errors::ApiError;
use super::models::{Page, Resource};
use crate::universe::Filter;

const USER_AGENT: &str = concat!("ricky/", env!("CARGO_PKG_VERSION"));

/// Client for one API base URL.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        // The blocking client defaults to a 30s timeout; only set one when asked.
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;

        debug!(base_url = %config.base_url(), timeout = ?config.timeout, "client ready");
        Ok(Self { http, config })
    }

    /// Fetch every page of `T`, in page order, until the first empty page.
    ///
    /// The filter pair, when present, is sent unchanged with every page
    /// request. Any failure aborts the whole fetch and discards what was
    /// accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` hit on any page.
    pub fn fetch_all<T: Resource>(&self, filter: Option<&Filter>) -> Result<Vec<T>, ApiError> {
        let mut all = Vec::new();

        for page in 1u32.. {
            let batch: Vec<T> = self.fetch_page(page, filter)?;
            if batch.is_empty() {
                break;
            }
            all.extend(batch);
        }

        debug!(kind = %T::KIND, total = all.len(), "fetch complete");
        Ok(all)
    }

    /// Fetch a single page (1-based).
    ///
    /// A 404 is how the upstream reports "nothing here" (page past the end,
    /// or a filter with no matches), so it is returned as an empty page.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` on connection or body read failure.
    /// - `ApiError::Status` on any other non-success status.
    /// - `ApiError::Decode` if the body is not `{ "results": [...] }`.
    pub fn fetch_page<T: Resource>(
        &self,
        page: u32,
        filter: Option<&Filter>,
    ) -> Result<Vec<T>, ApiError> {
        let mut url = self.config.endpoint(T::KIND)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            if let Some(filter) = filter {
                query.append_pair(&filter.key, &filter.value);
            }
        }
        let url_str = url.to_string();
        debug!(url = %url_str, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url = %url_str, "404, treating as last page");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| ApiError::Transport {
            url: url_str.clone(),
            source,
        })?;

        let page: Page<T> =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { url: url_str, source })?;
        Ok(page.results)
    }
}
