//! HTTP client for the CrunchBase v1 REST API.
//!
//! Wraps `reqwest` with CrunchBase-specific error handling, API key
//! management, and typed response deserialization. Every response body
//! is checked for the `"error"` field the v1 API uses to report
//! API-level failures; those surface as [`CrunchbaseError::ApiError`].
//! No retries are performed here.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CrunchbaseError;
use crate::types::{CompanyRecord, EntityKind, InvestorRecord, SearchResponse};

const DEFAULT_BASE_URL: &str = "http://api.crunchbase.com/v/1/";

/// Client for the CrunchBase v1 REST API.
///
/// Manages the HTTP client, API key, and base URL. Use
/// [`CrunchbaseClient::new`] for production or
/// [`CrunchbaseClient::with_base_url`] to point at a mock server in
/// tests.
pub struct CrunchbaseClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl CrunchbaseClient {
    /// Creates a new client pointed at the production CrunchBase API.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, CrunchbaseError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`CrunchbaseError::ApiError`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, CrunchbaseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cbminer/0.1 (funding-report)")
            .build()?;

        // Normalise: the base URL must end with a slash so that join()
        // appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| CrunchbaseError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches CrunchBase for entities matching `query`.
    ///
    /// Calls the `search.js` endpoint. Results of every namespace are
    /// returned; deciding whether the top hit is usable is the caller's
    /// concern.
    ///
    /// # Errors
    ///
    /// - [`CrunchbaseError::ApiError`] if the body carries an `"error"` field.
    /// - [`CrunchbaseError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CrunchbaseError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, CrunchbaseError> {
        tracing::debug!(query, "search.js");
        let url = self.build_url("search.js", &[("query", query)]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| CrunchbaseError::Deserialize {
            context: format!("search(query={query})"),
            source: e,
        })
    }

    /// Fetches the full company record for a known permalink.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CrunchbaseClient::search`].
    pub async fn get_company(&self, permalink: &str) -> Result<CompanyRecord, CrunchbaseError> {
        self.get_detail(EntityKind::Company, permalink).await
    }

    /// Fetches the full financial-organization record for a known permalink.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CrunchbaseClient::search`].
    pub async fn get_financial_org(
        &self,
        permalink: &str,
    ) -> Result<InvestorRecord, CrunchbaseError> {
        self.get_detail(EntityKind::FinancialOrganization, permalink)
            .await
    }

    /// Shared detail fetch: `GET {kind}/{permalink}.js`.
    async fn get_detail<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        permalink: &str,
    ) -> Result<T, CrunchbaseError> {
        let path = format!("{}/{permalink}.js", kind.as_str());
        tracing::debug!(%path, "detail fetch");
        let url = self.build_url(&path, &[]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| CrunchbaseError::Deserialize {
            context: format!("{}({permalink})", kind.as_str()),
            source: e,
        })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The API key is appended to every request.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Url {
        // join() cannot fail on a relative path against an absolute base.
        let mut url = self
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::Http`] on network failure or a non-2xx
    /// status. Returns [`CrunchbaseError::Deserialize`] if the body is
    /// not valid JSON (an empty body falls in here too).
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, CrunchbaseError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CrunchbaseError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks for the v1 `"error"` field and returns an error if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), CrunchbaseError> {
        if let Some(err) = body.get("error") {
            let msg = err
                .as_str()
                .map_or_else(|| err.to_string(), ToString::to_string);
            return Err(CrunchbaseError::ApiError(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> CrunchbaseClient {
        CrunchbaseClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_appends_api_key_and_query() {
        let client = test_client("http://api.crunchbase.com/v/1");
        let url = client.build_url("search.js", &[("query", "acme")]);
        assert_eq!(
            url.as_str(),
            "http://api.crunchbase.com/v/1/search.js?api_key=test-key&query=acme"
        );
    }

    #[test]
    fn build_url_company_detail_path() {
        let client = test_client("http://api.crunchbase.com/v/1/");
        let url = client.build_url("company/acme.js", &[]);
        assert_eq!(
            url.as_str(),
            "http://api.crunchbase.com/v/1/company/acme.js?api_key=test-key"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("http://api.crunchbase.com/v/1");
        let url = client.build_url("search.js", &[("query", "acme & co")]);
        assert!(
            url.as_str().contains("acme+%26+co") || url.as_str().contains("acme%20%26%20co"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn check_api_error_detects_error_field() {
        let body = serde_json::json!({ "error": "unknown api key" });
        let result = CrunchbaseClient::check_api_error(&body);
        assert!(
            matches!(result, Err(CrunchbaseError::ApiError(ref msg)) if msg == "unknown api key"),
            "expected ApiError, got: {result:?}"
        );
    }

    #[test]
    fn check_api_error_passes_clean_body() {
        let body = serde_json::json!({ "total": 0, "results": [] });
        assert!(CrunchbaseClient::check_api_error(&body).is_ok());
    }
}
