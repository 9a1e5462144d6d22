pub mod migration;
mod sql;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use roomie_error::{init::InitContextError, storage::StorageError, RMResult};
use roomie_models::{settings::Settings, DbManager};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};

/// Pool-backed database manager for the site.
pub struct SiteDbManager {
    db_conn: Option<DatabaseConnection>,
}

#[async_trait]
impl DbManager for SiteDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> RMResult<Arc<Self>, InitContextError> {
        let db_conn = {
            let db = sql::init_db(&settings.db).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to connect to database: {e}"))
            })?;

            Migrator::up(&db, None).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to migrate database: {e}"))
            })?;

            db
        };

        info!("Database manager initialized successfully");
        Ok(Arc::new(SiteDbManager {
            db_conn: Some(db_conn),
        }))
    }

    #[inline]
    fn get_connection(&self) -> RMResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> RMResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed");
        Ok(())
    }
}
