// tablegate server entrypoint
//!
//! Initialization and the server loop live in `lifecycle`; this file only
//! loads configuration and logging.

use anyhow::Result;
use log::{info, warn};
use std::env;
use std::path::Path;
use tablegate_server::config::ServerConfig;
use tablegate_server::{lifecycle, logging};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[actix_web::main]
async fn main() -> Result<()> {
    // First argument overrides the config path
    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config_missing = !Path::new(&config_path).exists();
    let config = if config_missing {
        ServerConfig::default()
    } else {
        match ServerConfig::from_file(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("FATAL: Failed to load {}: {}", config_path, e);
                std::process::exit(1);
            },
        }
    };

    let server_log_path = format!("{}/server.log", config.logging.logs_path);
    logging::init_logging(
        &config.logging.level,
        &server_log_path,
        config.logging.log_to_console,
        Some(&config.logging.targets),
        &config.logging.format,
    )?;

    if config_missing {
        warn!("Config file '{}' not found, using defaults", config_path);
    } else {
        info!("Loaded config from: {}", config_path);
    }
    info!("tablegate server v{}", env!("CARGO_PKG_VERSION"));

    let components = lifecycle::bootstrap(&config)?;
    lifecycle::run(&config, components).await
}
