use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables the service reads.
const ENV_KEYS: [&str; 4] = ["API_TOKEN", "DATABASE_PATH", "LISTEN_ADDR", "LOGLEVEL"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared secret gating product creation. Unset means the endpoint never authorizes.
    pub api_token: Option<String>,
    pub database_path: PathBuf,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            database_path: default_database_path(),
            listen_addr: "127.0.0.1:5000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment.
    ///
    /// Env values are merged as raw strings; `API_TOKEN=123456` must stay a
    /// string rather than be parsed into a number.
    pub fn load() -> Result<Self, figment::Error> {
        Env::raw()
            .only(&ENV_KEYS)
            .iter()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, (key, value)| {
                    let key = key.as_str().to_ascii_lowercase();
                    figment.merge(Serialized::default(&key, value))
                },
            )
            .extract()
    }

    pub fn has_api_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// `products.db` next to the running binary, or in the working directory.
fn default_database_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("products.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthGate;

    #[test]
    fn defaults_leave_token_unset() {
        let cfg = Config::default();
        assert!(cfg.api_token.is_none());
        assert!(!cfg.has_api_token());
        assert_eq!(cfg.database_path.file_name().unwrap(), "products.db");
        assert_eq!(cfg.listen_addr, "127.0.0.1:5000");
    }

    #[test]
    fn load_reads_every_env_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("API_TOKEN", "s3cret");
            jail.set_env("DATABASE_PATH", "/var/lib/shop/catalog.db");
            jail.set_env("LISTEN_ADDR", "0.0.0.0:8080");
            jail.set_env("LOGLEVEL", "debug");
            jail.set_env("UNRELATED_SETTING", "ignored");

            let cfg = Config::load()?;
            assert_eq!(cfg.api_token.as_deref(), Some("s3cret"));
            assert_eq!(cfg.database_path, PathBuf::from("/var/lib/shop/catalog.db"));
            assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
            assert_eq!(cfg.loglevel, "debug");
            Ok(())
        });
    }

    #[test]
    fn load_without_env_keeps_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let cfg = Config::load()?;
            let defaults = Config::default();
            assert!(cfg.api_token.is_none());
            assert_eq!(cfg.database_path, defaults.database_path);
            assert_eq!(cfg.listen_addr, defaults.listen_addr);
            assert_eq!(cfg.loglevel, defaults.loglevel);
            Ok(())
        });
    }

    #[test]
    fn load_keeps_scalar_looking_values_as_strings() {
        for token in ["123456", "true", "[a]", "1.5"] {
            figment::Jail::expect_with(|jail| {
                jail.set_env("API_TOKEN", token);
                jail.set_env("DATABASE_PATH", "42");

                let cfg = Config::load()?;
                assert_eq!(cfg.api_token.as_deref(), Some(token));
                assert_eq!(cfg.database_path, PathBuf::from("42"));

                let gate = AuthGate::new(cfg.api_token.as_deref());
                assert!(gate.authorize(Some(&format!("Bearer {token}"))));
                Ok(())
            });
        }
    }

    #[test]
    fn empty_token_counts_as_unset() {
        let cfg = Config {
            api_token: Some(String::new()),
            ..Config::default()
        };
        assert!(!cfg.has_api_token());
    }
}
