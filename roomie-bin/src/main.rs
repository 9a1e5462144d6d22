use clap::Parser;
use roomie_common::App;
use roomie_error::{RMError, RMResult};
use roomie_models::constants::DEFAULT_CONFIG_FILE_NAME;
use roomie_storage::SiteDbManager;
use roomie_web::RoomieWebServer;
use std::{env::current_dir, path::PathBuf};

/// Roomie site backend
///
/// Serves lead intake, cookie consent, the site assistant and the blog for
/// the Roomie marketing site.
#[derive(Parser)]
#[command(name = "roomie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Roomie site backend", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server looks for 'roomie.toml' in the current
    /// working directory. A missing file is fine; defaults and environment
    /// variables still apply.
    #[arg(short, long, env = "ROOMIE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> RMResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| RMError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let app = App::init::<SiteDbManager, RoomieWebServer>(
        config_path.to_string_lossy().to_string(),
    )
    .await?;

    // Run until a shutdown signal is received
    app.run().await
}
