//! Error types for the live-data collaborator.
//!
//! Transport failures, non-success statuses, and undecodable bodies are
//! distinct conditions; the runtime reports all three and treats each as
//! "no observations this tick".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not construct the underlying HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, timeout).
    #[error("Transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not a decodable live-data document.
    #[error("Malformed live payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
