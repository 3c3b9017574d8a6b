//! Client-side error type.

/// Errors produced by the HTTP adapter and use-case layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON shape the caller expected.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A use-case level wrapper naming the operation that failed.
    #[error("{context}: {source}")]
    Operation {
        /// Human-readable description of the failed operation.
        context: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap an adapter error with the failing operation's description.
    pub fn operation(context: &str, source: ClientError) -> Self {
        ClientError::Operation {
            context: context.to_string(),
            source: Box::new(source),
        }
    }
}
