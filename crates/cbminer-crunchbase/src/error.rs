use thiserror::Error;

/// Errors returned by the CrunchBase API client.
///
/// Callers that implement skip-and-continue semantics treat every
/// variant as "no usable data for this request"; the variants exist so
/// the operator log can tell a provider failure from a business miss.
#[derive(Debug, Error)]
pub enum CrunchbaseError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body carried an `"error"` field.
    #[error("CrunchBase API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
