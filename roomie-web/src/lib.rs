//! HTTP front end for the Roomie site backend
mod api;
mod middleware;
mod validation;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use async_trait::async_trait;
use middleware::cors::middleware;
use roomie_common::{AppContext, WebServer};
use roomie_error::{init::InitContextError, RMError, RMResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Register application state and every route on `cfg`.
///
/// Shared by the server factory and by integration tests, so both see the
/// same routing table and JSON limits.
pub fn configure(ctx: Arc<AppContext>) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        let web_settings = &ctx.settings().web;
        cfg.app_data(Data::from(Arc::clone(&ctx)))
            .app_data(validation::json_config(web_settings.json_limit))
            // Root routes (not under `/api`).
            .configure(api::configure_public_routes)
            .service(web::scope(&web_settings.router_prefix).configure(api::configure_routes));
    }
}

/// RoomieWebServer owns the running actix server
#[derive(Clone)]
pub struct RoomieWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl RoomieWebServer {
    /// Create and configure the HTTP server
    fn create_server(ctx: Arc<AppContext>) -> RMResult<Server> {
        let settings = ctx.settings();
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();
        let routes = configure(Arc::clone(&ctx));

        let server = HttpServer::new(move || {
            App::new()
                .wrap(middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(routes.clone())
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| RMError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for RoomieWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    async fn init(ctx: Arc<AppContext>) -> RMResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(ctx).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(RoomieWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    async fn stop(&self) -> RMResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");

        Ok(())
    }
}
