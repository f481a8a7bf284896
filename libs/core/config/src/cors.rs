use crate::{env_or_default, ConfigError, FromEnv};

/// Cross-origin policy for the HTTP API
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin may call the API (`*`)
    #[default]
    AnyOrigin,
    /// Only the listed origins may call the API
    Origins(Vec<String>),
}

impl CorsConfig {
    /// Parse a comma-separated origin list; `*` (or an empty value) allows any origin
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsConfig::AnyOrigin
        } else {
            CorsConfig::Origins(origins)
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        matches!(self, CorsConfig::AnyOrigin)
    }
}

impl FromEnv for CorsConfig {
    /// Reads CORS_ALLOWED_ORIGIN, defaulting to `*`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::parse(&env_or_default("CORS_ALLOWED_ORIGIN", "*")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_defaults_to_any_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert!(config.allows_any_origin());
        });
    }

    #[test]
    fn test_cors_parses_origin_list() {
        let config = CorsConfig::parse("http://localhost:3000, https://example.com");
        assert_eq!(
            config,
            CorsConfig::Origins(vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string()
            ])
        );
    }

    #[test]
    fn test_cors_wildcard_in_list_means_any() {
        let config = CorsConfig::parse("http://localhost:3000,*");
        assert_eq!(config, CorsConfig::AnyOrigin);
    }

    #[test]
    fn test_cors_empty_value_means_any() {
        assert_eq!(CorsConfig::parse(" , "), CorsConfig::AnyOrigin);
    }
}
