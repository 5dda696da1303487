use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown STORAGE_BACKEND '{0}', expected 'postgres' or 'memory'")]
    UnknownStorageBackend(String),
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Where products are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::UnknownStorageBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => 5,
        };

        Ok(Self {
            backend,
            database_url: lookup("DATABASE_URL"),
            max_connections,
            migrations_path: lookup("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|| "infrastructure/persistence/migrations".to_string()),
        })
    }
}

/// Initialize the database connection pool and apply migrations
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or a
/// migration cannot be applied
pub async fn init_database(config: &StorageConfig) -> anyhow::Result<PgPool> {
    let db_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set when STORAGE_BACKEND is postgres")?;

    let pool = create_postgres_pool(
        &DatabaseConfig::new(db_url).with_max_connections(config.max_connections),
    )
    .await?;
    run_migrations(&pool, &config.migrations_path).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_default_to_postgres_with_five_connections() {
        let config = StorageConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.backend, StorageBackend::Postgres);
        assert_eq!(config.max_connections, 5);
        assert!(config.database_url.is_none());
        assert_eq!(config.migrations_path, "infrastructure/persistence/migrations");
    }

    #[test]
    fn should_select_memory_backend_case_insensitively() {
        let config = StorageConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "Memory")]))
            .unwrap();

        assert_eq!(config.backend, StorageBackend::Memory);
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result = StorageConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "mongo")]));

        assert!(matches!(result, Err(ConfigError::UnknownStorageBackend(ref b)) if b == "mongo"));
    }

    #[test]
    fn should_reject_zero_or_garbage_pool_size() {
        for raw in ["0", "lots"] {
            let result =
                StorageConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", raw)]));
            assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));
        }
    }

    #[test]
    fn should_read_database_settings() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://catalog@localhost/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
            ("DATABASE_MIGRATIONS_PATH", "/srv/migrations"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://catalog@localhost/catalog")
        );
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.migrations_path, "/srv/migrations");
    }
}
