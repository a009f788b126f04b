use log::{info, warn};
use thiserror::Error as ThisError;
use url::Url;

pub const BASE_URL_VAR: &str = "SUPABASE_URL";
pub const PUBLISHABLE_KEY_VAR: &str = "SUPABASE_PUBLISHABLE_DEFAULT_KEY";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConfigError {
    #[error("Missing configuration value {0}")]
    Missing(&'static str),
    #[error("Base url is not a valid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Base url must be http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Connection parameters for the managed backend. Only constructed through
/// validation, so holding one means every value is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    publishable_key: String,
    anon_key: String,
}

fn require(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::Missing(name))
    } else {
        Ok(value.to_string())
    }
}

impl BackendConfig {
    pub fn new(base_url: &str, publishable_key: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let base_url = require(BASE_URL_VAR, base_url)?;
        let publishable_key = require(PUBLISHABLE_KEY_VAR, publishable_key)?;
        let anon_key = require(ANON_KEY_VAR, anon_key)?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        Ok(BackendConfig {
            base_url,
            publishable_key,
            anon_key,
        })
    }

    /// Reads the three variables through `lookup`. Absent and empty values are both
    /// reported as missing.
    pub fn load(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &'static str| match lookup(name) {
            Some(value) => {
                info!("{name} from env");
                value
            }
            None => {
                warn!("{name} not set");
                String::new()
            }
        };
        let base_url = read(BASE_URL_VAR);
        let publishable_key = read(PUBLISHABLE_KEY_VAR);
        let anon_key = read(ANON_KEY_VAR);
        Self::new(&base_url, &publishable_key, &anon_key)
    }

    /// Values baked in when the wasm bundle is compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::load(|name| {
            let value = match name {
                BASE_URL_VAR => option_env!("SUPABASE_URL"),
                PUBLISHABLE_KEY_VAR => option_env!("SUPABASE_PUBLISHABLE_DEFAULT_KEY"),
                ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Validated and kept, but no request sends it.
    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn function_url(&self, function: &str) -> String {
        format!("{}/functions/v1/{function}", self.base_url)
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn full_env() -> HashMap<&'static str, String> {
        env(&[
            (BASE_URL_VAR, "https://abc.supabase.co/"),
            (PUBLISHABLE_KEY_VAR, "pub-key"),
            (ANON_KEY_VAR, "anon-key"),
        ])
    }

    #[test]
    fn loads_and_strips_trailing_slash() {
        let vars = full_env();
        let config = BackendConfig::load(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.base_url(), "https://abc.supabase.co");
        assert_eq!(config.publishable_key(), "pub-key");
        assert_eq!(config.anon_key(), "anon-key");
        assert_eq!(
            config.function_url("recipe"),
            "https://abc.supabase.co/functions/v1/recipe"
        );
        assert_eq!(
            config.table_url("recipes"),
            "https://abc.supabase.co/rest/v1/recipes"
        );
    }

    #[test]
    fn each_variable_is_required() {
        for name in [BASE_URL_VAR, PUBLISHABLE_KEY_VAR, ANON_KEY_VAR] {
            let mut vars = full_env();
            vars.remove(name);
            assert_eq!(
                BackendConfig::load(|n| vars.get(n).cloned()),
                Err(ConfigError::Missing(name))
            );

            let mut vars = full_env();
            vars.insert(name, "  ".to_string());
            assert_eq!(
                BackendConfig::load(|n| vars.get(n).cloned()),
                Err(ConfigError::Missing(name))
            );
        }
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(matches!(
            BackendConfig::new("not a url", "p", "a"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert_eq!(
            BackendConfig::new("ftp://example.com", "p", "a"),
            Err(ConfigError::UnsupportedScheme("ftp".into()))
        );
    }
}
