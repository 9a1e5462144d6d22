use thiserror::Error;

/// Failures talking to the upstream chat-completion API.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was configured, so no request was attempted
    #[error("llm api key is not configured")]
    MissingApiKey,
    /// Transport-level failure (connect, timeout, body read)
    #[error("llm transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// Upstream answered with a non-success status
    #[error("llm upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
    /// Upstream payload could not be decoded
    #[error("llm decode error: {0}")]
    Decode(String),
}
