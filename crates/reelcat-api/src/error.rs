//! Error types for the TMDB client.

use thiserror::Error;

/// Errors produced by the API client.
///
/// The client is a pass-through: no retry, no backoff. Every failed call
/// surfaces as exactly one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("TMDB API error (HTTP {status}): {}", message.as_deref().unwrap_or("no upstream message"))]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Upstream `status_message`, when the error body could be parsed.
        message: Option<String>,
    },

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("failed to decode response for {path}: {source}")]
    Decode {
        /// Request path the body belonged to.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A path segment could not be joined onto the base URL.
    #[error("invalid request path: {0}")]
    Url(String),

    /// The client was misconfigured at build time (missing builder field).
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Short human-readable message for the view layer.
    ///
    /// Prefers the upstream-provided message when present, otherwise the
    /// given fallback. Diagnostic detail stays in logs, never here.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Upstream {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
