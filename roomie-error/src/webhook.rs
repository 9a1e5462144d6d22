use thiserror::Error;

/// Failures delivering a lead notification.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("webhook is not configured")]
    Disabled,
    #[error("webhook transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },
}
