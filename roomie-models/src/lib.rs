pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;

use async_trait::async_trait;
use roomie_error::{init::InitContextError, storage::StorageError, RMResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

/// Database management interface for the site backend.
///
/// Owns the connection pool; migrations run as part of `init`.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Connects, migrates and seeds.
    async fn init(settings: &Settings) -> RMResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// A handle to the pool. Cloning a `DatabaseConnection` is cheap.
    fn get_connection(&self) -> RMResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> RMResult<()>;
}
