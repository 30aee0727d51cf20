use thiserror::Error;
use visible_items_core::cors::CorsPolicy;
use visible_items_core::routing::Router;

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const CORS_ORIGIN_VAR: &str = "CORS_ORIGIN";
pub const BASE_PATH_VAR: &str = "BASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
}

/// Settings resolved once per execution environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub table_name: String,
    pub cors: CorsPolicy,
    pub router: Router,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = required_non_blank(&lookup, TABLE_NAME_VAR)?;
        let cors_origin = required_non_blank(&lookup, CORS_ORIGIN_VAR)?;
        let base_path = lookup(BASE_PATH_VAR).ok_or(ConfigError::Missing(BASE_PATH_VAR))?;

        Ok(Self {
            table_name,
            cors: CorsPolicy::new(cors_origin),
            router: Router::new(&base_path),
        })
    }
}

fn required_non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn resolves_all_settings() {
        let config = HandlerConfig::from_lookup(lookup_from(&[
            ("TABLE_NAME", "items-table"),
            ("CORS_ORIGIN", "https://app.example.com"),
            ("BASE_PATH", "/items/"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.table_name, "items-table");
        assert_eq!(config.cors.allow_origin(), "https://app.example.com");
        assert!(config
            .cors
            .response_headers(Some("https://app.example.com"), false)
            .contains(&("access-control-max-age", "300".to_string())));
        assert_eq!(config.router.base_path(), "/items");
    }

    #[test]
    fn empty_base_path_is_accepted() {
        let config = HandlerConfig::from_lookup(lookup_from(&[
            ("TABLE_NAME", "items-table"),
            ("CORS_ORIGIN", "*"),
            ("BASE_PATH", ""),
        ]))
        .expect("config should resolve");

        assert_eq!(config.router.base_path(), "");
    }

    #[test]
    fn missing_table_name_is_reported() {
        let error = HandlerConfig::from_lookup(lookup_from(&[
            ("CORS_ORIGIN", "*"),
            ("BASE_PATH", "/items"),
        ]))
        .expect_err("config should fail");

        assert_eq!(error, ConfigError::Missing("TABLE_NAME"));
        assert_eq!(error.to_string(), "TABLE_NAME must be configured");
    }

    #[test]
    fn blank_cors_origin_is_rejected() {
        let error = HandlerConfig::from_lookup(lookup_from(&[
            ("TABLE_NAME", "items-table"),
            ("CORS_ORIGIN", "   "),
            ("BASE_PATH", "/items"),
        ]))
        .expect_err("config should fail");

        assert_eq!(error, ConfigError::Missing("CORS_ORIGIN"));
    }

    #[test]
    fn missing_base_path_is_reported() {
        let error = HandlerConfig::from_lookup(lookup_from(&[
            ("TABLE_NAME", "items-table"),
            ("CORS_ORIGIN", "*"),
        ]))
        .expect_err("config should fail");

        assert_eq!(error, ConfigError::Missing("BASE_PATH"));
    }
}
