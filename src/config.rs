use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub app_name: String,
    pub allow_invalid_certificates: bool,
}

/// Where "advertisement created" events are published.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGridConfig {
    pub endpoint: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub event_grid: Option<EventGridConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let uri = var("MONGODB_URI")
            .or_else(|| var("MyDbConnection"))
            .ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let allow_invalid_certificates = match var("MONGODB_TLS_ALLOW_INVALID_CERTIFICATES") {
            None => false,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                name: "MONGODB_TLS_ALLOW_INVALID_CERTIFICATES",
                value: v,
            })?,
        };

        let port = match var("PORT") {
            None => 8000,
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: v,
            })?,
        };

        // Both halves are needed; either one alone disables publishing.
        let event_grid = match (var("EVENT_GRID_TOPIC_ENDPOINT"), var("EVENT_GRID_TOPIC_KEY")) {
            (Some(endpoint), Some(key)) => Some(EventGridConfig { endpoint, key }),
            _ => None,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            store: StoreConfig {
                uri,
                database: var("MONGODB_DATABASE").unwrap_or_else(|| "neighbourlydb".to_string()),
                app_name: var("MONGODB_APP_NAME").unwrap_or_else(|| "neighbourly_api".to_string()),
                allow_invalid_certificates,
            },
            event_grid,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
