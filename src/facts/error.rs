use thiserror::Error;

/// Errors that can occur while looking up a fact.
///
/// Never surfaced past the effect boundary; the counter reducer turns them
/// into display text.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("fact service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered with an empty body
    #[error("fact service returned an empty response")]
    Empty,

    /// Service cannot be reached or is not configured
    #[error("fact service unavailable: {reason}")]
    Unavailable { reason: String },
}
