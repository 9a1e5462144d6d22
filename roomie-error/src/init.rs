use thiserror::Error;

/// Errors raised while wiring the application context at startup
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a required component has not been initialized yet
    #[error("component not initialized: {0}")]
    NotInitialized(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
