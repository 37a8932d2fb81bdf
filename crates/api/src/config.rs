use axum::http::HeaderValue;
use catalog_core::policy::{CatalogPolicy, DeletionPolicy, VisibilityPolicy};

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Browser origins allowed to call the catalog, parsed from the
    /// comma-separated `CORS_ORIGINS` env var. Empty means same-origin only.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Pool size (default: `20`).
    pub database_max_connections: u32,
    /// Product visibility and deletion behaviour.
    pub catalog_policy: CatalogPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | (none)                     |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DATABASE_URL`             | (required)                 |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `PRODUCT_VISIBILITY`       | `available-only`           |
    /// | `PRODUCT_DELETION`         | `soft`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var_or("HOST", "0.0.0.0");
        let port: u16 = parse_number("PORT", &var_or("PORT", "3000"))?;

        let cors_origins = parse_origins(&var_or("CORS_ORIGINS", ""))?;

        let request_timeout_secs: u64 =
            parse_number("REQUEST_TIMEOUT_SECS", &var_or("REQUEST_TIMEOUT_SECS", "30"))?;

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing {
            var: "DATABASE_URL",
        })?;
        let database_max_connections: u32 = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            &var_or("DATABASE_MAX_CONNECTIONS", "20"),
        )?;

        let visibility = VisibilityPolicy::from_str_value(&var_or(
            "PRODUCT_VISIBILITY",
            VisibilityPolicy::default().as_str(),
        ))
        .map_err(|e| ConfigError::Invalid {
            var: "PRODUCT_VISIBILITY",
            reason: e.to_string(),
        })?;
        let deletion = DeletionPolicy::from_str_value(&var_or(
            "PRODUCT_DELETION",
            DeletionPolicy::default().as_str(),
        ))
        .map_err(|e| ConfigError::Invalid {
            var: "PRODUCT_DELETION",
            reason: e.to_string(),
        })?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
            catalog_policy: CatalogPolicy::new(visibility, deletion),
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                reason: format!("'{origin}': {e}"),
            })
        })
        .collect()
}

fn parse_number<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: format!("'{raw}': {e}"),
    })
}
