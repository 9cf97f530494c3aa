//! Tries to create an `AppConfig` from config files.
//! Builds the configuration from layered TOML files (`base.toml` plus one per
//! `APP_ENVIRONMENT`), then applies the process-environment overrides:
//! `DATABASE_URL` (a single connection string) and `APP_PORT`.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod data;
mod error;

use std::sync::OnceLock;
use tracing::info;

use data::Environment;

// Re-export config structs
pub use data::{AppConfig, DbConfig, NetConfig, SslRequire};
pub use error::{ConfigError, ConfigResult};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!(
            "{:<20} - Initializing the configuration",
            "get_or_init_config"
        );
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");
        let config_dir = base_path.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .expect("Failed to parse APP_ENVIRONMENT.");
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let base_file = std::fs::File::open(config_dir.join("base.toml"))
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));
        let env_file = std::fs::File::open(config_dir.join(environment_filename))
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));

        let mut config = AppConfig::init()
            .add_source_file(base_file)
            .add_source_file(env_file)
            .build()
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));

        // The deployment environment supplies the database as a single
        // connection string. Required in production, optional elsewhere.
        match std::env::var("DATABASE_URL") {
            Ok(database_url) => {
                let db_config = DbConfig::try_from(database_url.as_str()).unwrap_or_else(|er| {
                    panic!("Fatal Error: While parsing DbConfig from String: {er:?}")
                });
                config.db_config = db_config;
            }
            Err(er) => {
                if matches!(environment, Environment::Production) {
                    panic!("Fatal Error: While looking for DATABASE_URL env variable: {er:?}")
                }
            }
        }

        if let Ok(app_port) = std::env::var("APP_PORT") {
            config.net_config.app_port = app_port
                .parse()
                .unwrap_or_else(|er| panic!("Fatal Error: While parsing APP_PORT: {er:?}"));
        }

        config
    })
}
