pub mod init;
pub mod llm;
pub mod storage;
pub mod web;
pub mod webhook;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use llm::LlmError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError};
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;
use webhook::WebhookError;

pub type RMResult<T, E = RMError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type LlmResult<T, E = LlmError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum RMError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    LlmError(#[from] LlmError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("{0}")]
    WebhookError(#[from] WebhookError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl From<String> for RMError {
    #[inline]
    fn from(e: String) -> Self {
        RMError::Msg(e)
    }
}

impl From<&str> for RMError {
    #[inline]
    fn from(e: &str) -> Self {
        RMError::Msg(e.to_string())
    }
}

impl From<DbErr> for RMError {
    #[inline]
    fn from(e: DbErr) -> Self {
        RMError::StorageError(StorageError::DBError(e))
    }
}
