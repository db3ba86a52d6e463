//! # configs
//!
//! Layered runtime settings: built-in defaults, then an optional
//! `animehub.toml` next to the binary, then `ANIMEHUB_*` environment
//! variables (e.g. `ANIMEHUB_SERVER__BIND`, `ANIMEHUB_STORE__API_KEY`;
//! `__` separates nesting levels). A `.env` file is honored before the
//! environment is read. The store service key never leaves its
//! `SecretString` wrapper except at the HTTP-header boundary.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "store-rest")]
use secrecy::SecretString;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[cfg(feature = "store-rest")]
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// Socket address the web server binds, e.g. `127.0.0.1:8080`.
    pub bind: String,
}

/// Connection settings for the hosted `posts` collection.
#[cfg(feature = "store-rest")]
#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    /// REST root of the data service, e.g. `https://xyz.supabase.co/rest/v1`.
    pub base_url: String,
    pub api_key: SecretString,
}

/// Loads settings from defaults, file, and environment, in that order.
pub fn load() -> Result<Settings, ConfigError> {
    // A missing .env file is the normal case outside development.
    let _ = dotenvy::dotenv();

    let config = config::Config::builder()
        .set_default("server.bind", "127.0.0.1:8080")?
        .add_source(config::File::with_name("animehub").required(false))
        .add_source(config::Environment::with_prefix("ANIMEHUB").separator("__"))
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    debug!(bind = %settings.server.bind, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let config = config::Config::builder()
            .set_default("server.bind", "127.0.0.1:8080")
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    #[cfg(feature = "store-rest")]
    #[test]
    fn file_settings_deserialize_with_secret_key() {
        use secrecy::ExposeSecret;

        let settings = from_toml(
            r#"
            [store]
            base_url = "https://xyz.supabase.co/rest/v1"
            api_key = "service-key"
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.bind, "127.0.0.1:8080");
        assert_eq!(settings.store.base_url, "https://xyz.supabase.co/rest/v1");
        assert_eq!(settings.store.api_key.expose_secret(), "service-key");
    }

    #[cfg(feature = "store-rest")]
    #[test]
    fn missing_store_section_is_an_error() {
        assert!(from_toml("").is_err());
    }

    #[cfg(not(feature = "store-rest"))]
    #[test]
    fn defaults_alone_are_enough_without_a_remote_store() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn file_overrides_the_default_bind() {
        let toml = r#"
            [server]
            bind = "0.0.0.0:9000"
            [store]
            base_url = "http://localhost:3000"
            api_key = "k"
        "#;
        let settings = from_toml(toml).unwrap();
        assert_eq!(settings.server.bind, "0.0.0.0:9000");
    }
}
