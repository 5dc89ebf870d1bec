//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Where the post store lives.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    pub server_selection_timeout: Duration,
}

/// Which `PostStore` the server is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    /// Process-local store; nothing is persisted across restarts.
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StoreBackend::MongoDb),
            "memory" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| "blog_posts".to_string()),
            server_selection_timeout: Duration::from_secs(
                lookup("MONGODB_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        };

        let store = match lookup("STORE_BACKEND") {
            Some(value) => StoreBackend::parse(&value).unwrap_or_else(|| {
                log::warn!("Unknown STORE_BACKEND {:?}, using mongodb", value);
                StoreBackend::MongoDb
            }),
            None => StoreBackend::MongoDb,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "localhost".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8000),
            store,
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8000);
        assert_eq!(config.store, StoreBackend::MongoDb);
        assert_eq!(config.database.uri, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "blog_posts");
        assert_eq!(config.database.server_selection_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HOST", "0.0.0.0"),
            ("PORT", "not-a-port"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("DATABASE_NAME", "blog_test"),
            ("MONGODB_TIMEOUT_SECS", "2"),
            ("STORE_BACKEND", "Memory"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database.uri, "mongodb://db:27017");
        assert_eq!(config.database.name, "blog_test");
        assert_eq!(config.database.server_selection_timeout, Duration::from_secs(2));
        assert_eq!(config.store, StoreBackend::Memory);
    }

    #[test]
    fn test_unknown_store_backend_falls_back_to_mongodb() {
        let config = AppConfig::from_lookup(|key| {
            (key == "STORE_BACKEND").then(|| "sqlite".to_string())
        });
        assert_eq!(config.store, StoreBackend::MongoDb);
    }
}
