use roomie_error::RMResult;
use roomie_models::settings::Db;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

/// Open the pool for `config.url`.
///
/// SQLite and Postgres are both accepted; for SQLite file creation is driven
/// by `mode=rwc` in the URL.
#[instrument(name = "init-db", skip_all)]
pub async fn init_db(config: &Db) -> RMResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(&config.url);
    opts.connect_timeout(Duration::from_millis(config.timeout))
        .max_connections(config.max_connections);

    // an in-memory SQLite database lives only as long as its connection
    if !is_in_memory(&config.url) {
        opts.idle_timeout(Duration::from_millis(config.idle_timeout))
            .max_lifetime(Duration::from_millis(config.max_lifetime));
    }

    if config.sql_logging {
        opts.sqlx_logging(true).sqlx_logging_level(LevelFilter::Debug);
    } else {
        opts.sqlx_logging(false).sqlx_logging_level(LevelFilter::Off);
    }

    info!(backend = backend_name(&config.url), "Connecting to database");
    let db = Database::connect(opts).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        // WAL stays off to remain safe on network filesystems
        for pragma in [
            "PRAGMA synchronous=NORMAL;",
            "PRAGMA temp_store=MEMORY;",
        ] {
            db.execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string()))
                .await?;
        }
    }

    info!("Successfully connected to database");
    Ok(db)
}

#[inline]
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn backend_name(url: &str) -> &'static str {
    if url.starts_with("sqlite:") {
        "sqlite"
    } else if url.starts_with("postgres") {
        "postgres"
    } else {
        "unknown"
    }
}
