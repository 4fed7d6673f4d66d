use thiserror::Error;

/// Failures surfaced to the caller of an assistant operation.
///
/// Generator failures are not retried; the caller decides what to show.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("API key not found: set the {var} environment variable")]
    MissingApiKey { var: String },
    #[error("generator request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
    #[error("{0}")]
    InvalidInput(String),
}
