/// Client configuration: base URL and request timeout.
use std::time::Duration;

use url::Url;

use super::errors::ApiError;
use super::models::ResourceKind;

/// Public endpoint used when neither `--api-url` nor `RICKY_API_URL` is set.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Validated settings for [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, always ending in `/` so listing paths can be joined onto it.
    base_url: Url,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parse and normalise a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` is not an absolute
    /// URL that can carry path segments (e.g. `mailto:` or a bare word).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
        };

        let mut url = Url::parse(base_url).map_err(|_| invalid())?;
        if url.cannot_be_a_base() {
            return Err(invalid());
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        // Filters and pages are added per request.
        url.set_query(None);

        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// The base URL as configured (normalised with a trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Listing endpoint for a resource kind, e.g. `https://host/api/character/`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the join fails.
    pub fn endpoint(&self, kind: ResourceKind) -> Result<Url, ApiError> {
        self.base_url
            .join(&format!("{}/", kind.path()))
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })
    }
}
