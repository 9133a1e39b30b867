//! Configuration management for the driver portal
//!
//! Separates the document store collaborator settings from the client-side
//! settings (remember-me slot, lookup timeout).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Complete portal configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub client: ClientConfig,
}

/// Remote document store settings
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// JSON fixture file backing the in-process document store
    pub fixtures_path: String,

    /// Collection queried by civil ID on driver login
    pub drivers_collection: String,

    /// Collection fetched by username on admin login
    pub admins_collection: String,

    /// Field holding the civil ID inside driver documents
    pub civil_id_field: String,
}

/// Client-side settings
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// JSON file backing the local key-value slot
    /// Environment: DRIVER_PORTAL_CLIENT__CREDENTIALS_PATH
    pub credentials_path: String,

    /// Key of the remembered civil ID
    pub remember_key: String,

    /// Upper bound for a single remote lookup
    /// Environment: DRIVER_PORTAL_CLIENT__LOOKUP_TIMEOUT_SECS
    pub lookup_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from config.toml (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_paths = ["driver-portal/config", "config"];

        let mut builder = Self::defaults()?;
        for config_path in &config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("DRIVER_PORTAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an in-memory TOML document on top of the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("store.fixtures_path", "fixtures/store.json")?
            .set_default("store.drivers_collection", "drivers")?
            .set_default("store.admins_collection", "admins")?
            .set_default("store.civil_id_field", "civil_id")?
            .set_default("client.credentials_path", "data/credentials.json")?
            .set_default("client.remember_key", "@auth_civil_id")?
            .set_default("client.lookup_timeout_secs", 10_i64)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        let required = [
            ("store.fixtures_path", &self.store.fixtures_path),
            ("store.drivers_collection", &self.store.drivers_collection),
            ("store.admins_collection", &self.store.admins_collection),
            ("store.civil_id_field", &self.store.civil_id_field),
            ("client.credentials_path", &self.client.credentials_path),
            ("client.remember_key", &self.client.remember_key),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{} cannot be empty",
                    name
                )));
            }
        }

        if self.client.lookup_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "lookup_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl StoreConfig {
    pub fn fixtures_path(&self) -> PathBuf {
        PathBuf::from(&self.fixtures_path)
    }
}

impl ClientConfig {
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(&self.credentials_path)
    }

    /// Get lookup timeout as Duration
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}
