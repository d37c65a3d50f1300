//! Simple getenv-config demo
//!
//! Run from the repository root:
//!
//! ```text
//! DB_USER=admin DB_PASSWORD=secret123 SERVER_ADDRESS=0.0.0.0 APP_ENV=production \
//!     cargo run --example simple
//! ```

use clap::Parser;
use getenv_config::{ConfigLoader, placeholder_names};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Deserialize)]
struct Config {
    database: DatabaseConfig,
    server: ServerConfig,
    app: AppConfig,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    host: String,
    port: u16,
    user: String,
    #[allow(dead_code)]
    password: String,
    database: String,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    address: String,
    port: u16,
}

#[derive(Debug, Deserialize)]
struct AppConfig {
    name: String,
    environment: String,
    debug: bool,
}

/// Load a YAML config with environment placeholders and print it
#[derive(Parser, Debug)]
#[command(name = "simple")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "SIMPLE_CONFIG", default_value = "demos/simple/config.yaml")]
    config: PathBuf,

    /// Env file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SIMPLE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Unset variables usually show up as parse errors, so name them
fn warn_unresolved(config_path: &Path) {
    let Ok(raw) = std::fs::read_to_string(config_path) else {
        return;
    };

    for name in placeholder_names(&raw) {
        let unset = !std::env::var(&name).is_ok_and(|v| !v.is_empty());
        if unset {
            warn!(variable = %name, "Environment variable not set");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(env_file) = &args.env_file {
        loader = loader.dotenv_path(env_file);
    }

    let config: Config = match loader.load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            warn_unresolved(&args.config);
            return Err(e.into());
        }
    };

    info!("Configuration loaded successfully!");
    info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.database,
        "Database"
    );
    info!(user = %config.database.user, "Database user");
    info!(address = %config.server.address, port = config.server.port, "Server");
    info!(
        name = %config.app.name,
        environment = %config.app.environment,
        debug = config.app.debug,
        "App"
    );

    Ok(())
}
