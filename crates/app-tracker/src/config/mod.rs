use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default location of the JSON store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "./data/applicationlist.json";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the tracker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("APP_STORE_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        if path.trim().is_empty() {
            return Err(ConfigError::EmptyStorePath);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            store: StoreConfig {
                path: PathBuf::from(path),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the application list is persisted.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyStorePath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyStorePath => write!(f, "APP_STORE_PATH must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
