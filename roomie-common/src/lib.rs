//! Shared runtime for the Roomie site backend.
//!
//! [`AppContext`] is the state every request handler sees; [`App`] owns the
//! process lifecycle around it (logging, database, HTTP server, shutdown).
pub mod llm;
mod logger;
pub mod webhook;

pub use logger::Logger;
pub use roomie_error::{RMError, RMResult};

use async_trait::async_trait;
use llm::LlmClient;
use roomie_error::{init::InitContextError, storage::StorageError};
use roomie_models::{
    constants::{DATA_DIR, LOG_DIR},
    settings::Settings,
    DbManager,
};
use sea_orm::DatabaseConnection;
use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, span, warn, Level};
use webhook::WebhookNotifier;

/// HTTP front end started by [`App::init`].
#[async_trait]
pub trait WebServer: Send + Sync + 'static {
    /// Bind and start serving in the background.
    async fn init(ctx: Arc<AppContext>) -> RMResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Stop accepting connections and drain in-flight requests.
    async fn stop(&self) -> RMResult<()>;
}

/// Request-facing state: settings, the database and outbound clients.
pub struct AppContext {
    settings: Settings,
    db_manager: Arc<dyn DbManager>,
    webhook: WebhookNotifier,
    llm: LlmClient,
}

impl AppContext {
    pub fn new(settings: Settings, db_manager: Arc<dyn DbManager>) -> RMResult<Self> {
        let webhook = WebhookNotifier::new(&settings.webhook)?;
        let llm = LlmClient::new(&settings.llm)?;

        if !webhook.is_enabled() {
            info!("Lead webhook disabled: no url configured");
        }
        if settings.llm.api_key.is_none() {
            info!("LLM api key not configured; chat endpoints will answer 500");
        }

        Ok(Self {
            settings,
            db_manager,
            webhook,
            llm,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn db_manager(&self) -> Arc<dyn DbManager> {
        Arc::clone(&self.db_manager)
    }

    #[inline]
    pub fn db(&self) -> RMResult<DatabaseConnection, StorageError> {
        self.db_manager.get_connection()
    }

    #[inline]
    pub fn webhook(&self) -> &WebhookNotifier {
        &self.webhook
    }

    #[inline]
    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }
}

/// Process lifecycle: owns the logger, the context and the web server.
pub struct App {
    logger: Logger,
    ctx: Arc<AppContext>,
    web_server: Arc<dyn WebServer>,
    shutting_down: AtomicBool,
    shutdown_token: CancellationToken,
}

impl App {
    /// Load settings, start logging, connect and migrate the database, then
    /// start the HTTP server.
    pub async fn init<D, W>(config: String) -> RMResult<Self>
    where
        D: DbManager,
        W: WebServer,
    {
        // settings come first so relative paths resolve under the runtime dir
        let settings = Settings::new(config)?;
        apply_runtime_dir(&settings.general.runtime_dir)?;
        ensure_runtime_directories()?;

        let mut logger = Logger::from_config(&settings.log.level, settings.log.file)?;
        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        let db_manager: Arc<dyn DbManager> = D::init(&settings).await?;
        info!("Database initialized successfully.");

        let ctx = Arc::new(AppContext::new(settings, db_manager)?);

        let web_server: Arc<dyn WebServer> = W::init(Arc::clone(&ctx)).await?;
        info!("Web server initialized successfully.");

        Ok(Self {
            logger,
            ctx,
            web_server,
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        })
    }

    #[inline]
    pub fn context(&self) -> Arc<AppContext> {
        Arc::clone(&self.ctx)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Token that stops [`App::run`] without an OS signal.
    #[inline]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Serve until a shutdown signal arrives, then shut down gracefully.
    pub async fn run(&self) -> RMResult<()> {
        self.wait_for_shutdown().await?;
        self.graceful_shutdown().await
    }

    async fn wait_for_shutdown(&self) -> RMResult<()> {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;
            let mut sigquit = signal(SignalKind::quit())?;

            tokio::select! {
                _ = sigterm.recv() => info!("Received SIGTERM signal"),
                _ = sigint.recv() => info!("Received SIGINT signal"),
                _ = sighup.recv() => info!("Received SIGHUP signal"),
                _ = sigquit.recv() => info!("Received SIGQUIT signal"),
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => info!("Received ctrl-c signal"),
                _ = shutdown_token.cancelled() => {}
            }
        }

        Ok(())
    }

    /// Stop the web server, then close the pool. Runs at most once.
    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> RMResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("Starting graceful shutdown...");

        // in-flight requests may still need the database
        self.web_server.stop().await?;

        if let Err(e) = self.ctx.db_manager().close().await {
            warn!(error = %e, "Failed to close database");
        }

        info!("Graceful shutdown completed");
        Ok(())
    }
}

/// Switch the working directory to `runtime_dir` so that `./data` and
/// `./logs` resolve under it.
fn apply_runtime_dir(runtime_dir: &str) -> RMResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| RMError::from(format!("Failed to create runtime_dir {dir}: {e}")))?;
    std::env::set_current_dir(dir)
        .map_err(|e| RMError::from(format!("Failed to enter runtime_dir {dir}: {e}")))?;
    Ok(())
}

fn ensure_runtime_directories() -> RMResult<()> {
    for dir in [Path::new(DATA_DIR), Path::new(LOG_DIR)] {
        std::fs::create_dir_all(dir).map_err(|e| {
            RMError::from(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomie_models::settings::Inner;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingDb {
        closed: AtomicUsize,
    }

    #[async_trait]
    impl DbManager for CountingDb {
        async fn init(_: &Settings) -> RMResult<Arc<Self>, InitContextError> {
            Ok(Arc::default())
        }

        fn get_connection(&self) -> RMResult<DatabaseConnection, StorageError> {
            Err(StorageError::StorageUnavailable)
        }

        async fn close(&self) -> RMResult<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Err(RMError::from("already closed".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingServer {
        stopped: AtomicUsize,
    }

    #[async_trait]
    impl WebServer for CountingServer {
        async fn init(_: Arc<AppContext>) -> RMResult<Arc<Self>, InitContextError> {
            Ok(Arc::default())
        }

        async fn stop(&self) -> RMResult<()> {
            self.stopped.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn shutdown_stops_server_then_closes_db_once() {
        let db = Arc::new(CountingDb::default());
        let server = Arc::new(CountingServer::default());
        let settings = Settings::from_inner(Inner::default());
        let app = App {
            logger: Logger::new(Level::INFO, false),
            ctx: Arc::new(AppContext::new(settings, db.clone()).unwrap()),
            web_server: server.clone(),
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        };

        // a failing close is logged, not returned
        app.graceful_shutdown().await.unwrap();
        app.graceful_shutdown().await.unwrap();

        assert_eq!(server.stopped.load(Ordering::SeqCst), 1);
        assert_eq!(db.closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn run_returns_after_token_is_cancelled() {
        let db = Arc::new(CountingDb::default());
        let server = Arc::new(CountingServer::default());
        let app = App {
            logger: Logger::new(Level::INFO, false),
            ctx: Arc::new(
                AppContext::new(Settings::from_inner(Inner::default()), db.clone()).unwrap(),
            ),
            web_server: server.clone(),
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        };

        app.shutdown_token().cancel();
        app.run().await.unwrap();
        assert_eq!(db.closed.load(Ordering::SeqCst), 1);
    }
}
