use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a listing request does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Hard cap applied to requested page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

fn default_page_size() -> u64 {
    20
}

fn default_max_page_size() -> u64 {
    100
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Load application configuration from `config.yaml` + environment overrides.
///
/// Any environment variable matching the key path separated by double
/// underscores (e.g. `PAGINATION__MAX_PAGE_SIZE`) overrides the file value.
///
/// Returns a `ConfigError` instead of panicking so the caller can decide how
/// to fail.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name("config.yaml"))
        .add_source(Environment::default().separator("__"))
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    validate(&app)?;
    Ok(app)
}

/// Sanity checks applied after deserialization.
pub fn validate(app: &AppConfig) -> Result<(), ConfigError> {
    if app.database_url.is_empty() {
        return Err(ConfigError::Validation(
            "database_url must not be empty".into(),
        ));
    }
    if app.pagination.default_page_size == 0 {
        return Err(ConfigError::Validation(
            "pagination.default_page_size must be > 0".into(),
        ));
    }
    if app.pagination.default_page_size > app.pagination.max_page_size {
        return Err(ConfigError::Validation(
            "pagination.default_page_size must not exceed pagination.max_page_size".into(),
        ));
    }
    Ok(())
}

/// Convenience helper for binaries wanting panic-on-error behaviour.
pub fn load_config_or_panic() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => panic!("Failed to load configuration: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn pagination_defaults_apply() {
        let app = from_yaml("database_url: \"sqlite::memory:\"\n");
        assert_eq!(app.pagination.default_page_size, 20);
        assert_eq!(app.pagination.max_page_size, 100);
        assert_eq!(app.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn pagination_overrides_apply() {
        let app = from_yaml(
            r#"
database_url: "postgres://localhost/profiles"
listen_addr: "127.0.0.1:9090"
pagination:
  default_page_size: 5
  max_page_size: 50
"#,
        );
        assert_eq!(app.pagination.default_page_size, 5);
        assert_eq!(app.pagination.max_page_size, 50);
        assert_eq!(app.listen_addr, "127.0.0.1:9090");
    }
}
