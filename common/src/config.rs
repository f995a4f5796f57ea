// common/src/config.rs
use ::config::{Config as ConfigFile, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::models::session::LOGIN_EXPIRE_DAYS;

/// Central configuration for the portal server
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub portal_server_addr: String,

    pub session: SessionConfig,

    // Static file serving configuration
    pub static_files: StaticFilesConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory the file-backed session store writes under.
    pub storage_path: String,
    /// Login validity window in days.
    pub expire_days: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    pub path: String,
    pub index: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal_server_addr: "127.0.0.1:8090".to_string(),
            session: SessionConfig {
                storage_path: "./data".to_string(),
                expire_days: LOGIN_EXPIRE_DAYS,
            },
            static_files: StaticFilesConfig {
                path: "./static".to_string(),
                index: "index.html".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        // Get the run mode, defaulting to "development"
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        // Locate the config directory
        let config_dir = env::var("CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Check if we're in the project root or a subcrate
                let mut path = PathBuf::from("./config");
                if !path.exists() {
                    path = PathBuf::from("../config");
                }
                path
            });

        tracing::info!("Loading configuration from {}", config_dir.display());
        tracing::info!("Using run mode: {}", run_mode);

        // Build configuration
        let config = ConfigFile::builder()
            // Start with defaults
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add environment specific config
            .add_source(File::from(config_dir.join(format!("{}.toml", run_mode))).required(false))
            // Add a local config file for local overrides
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment variables with prefix "PORTAL"
            .add_source(Environment::with_prefix("PORTAL").separator("__"))
            // Build and deserialize
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load from environment variables directly (backward compatibility)
    pub fn from_env() -> Self {
        // Try to load from file first
        match Self::load() {
            Ok(config) => {
                tracing::info!("Configuration loaded from files and environment");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load configuration from files: {}", e);
                tracing::info!("Falling back to environment variables only");

                let defaults = Config::default();

                let portal_server_addr =
                    env::var("PORTAL_SERVER_ADDR").unwrap_or(defaults.portal_server_addr);

                let storage_path =
                    env::var("SESSION_STORAGE_PATH").unwrap_or(defaults.session.storage_path);

                let expire_days = env::var("SESSION_EXPIRE_DAYS")
                    .ok()
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or(defaults.session.expire_days);

                let static_files_path =
                    env::var("STATIC_FILES_PATH").unwrap_or(defaults.static_files.path);

                let static_files_index =
                    env::var("STATIC_FILES_INDEX").unwrap_or(defaults.static_files.index);

                Self {
                    portal_server_addr,
                    session: SessionConfig {
                        storage_path,
                        expire_days,
                    },
                    static_files: StaticFilesConfig {
                        path: static_files_path,
                        index: static_files_index,
                    },
                }
            }
        }
    }
}
