use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, merged from defaults and `CASTOR_`-prefixed
/// environment variables (e.g. `CASTOR_DATABASE_URL`, `CASTOR_API_KEY`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// When unset, the auth middleware passes every request through.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:castor.sqlite".to_string(),
            loglevel: "info".to_string(),
            api_key: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("CASTOR_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        figment::Jail::expect_with(|_| {
            let cfg = Config::load().expect("default config should load");
            assert_eq!(cfg.bind_addr, "0.0.0.0:8000");
            assert_eq!(cfg.loglevel, "info");
            assert!(cfg.api_key.is_none());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CASTOR_BIND_ADDR", "127.0.0.1:9100");
            jail.set_env("CASTOR_API_KEY", "secret");
            let cfg = Config::load().expect("config should load from env");
            assert_eq!(cfg.bind_addr, "127.0.0.1:9100");
            assert_eq!(cfg.api_key.as_deref(), Some("secret"));
            Ok(())
        });
    }
}
