//! Load-time overrides on top of the compiled variant
//!
//! Layers are merged in this order, later layers winning:
//! 1. The compiled variant
//! 2. A TOML file (`coffee-shop.toml` unless a path is given)
//! 3. `COFFEE_SHOP_*` environment variables, nested with `__`
//!
//! `production` belongs to the build variant. The env layer never sets it and
//! a file that disagrees with the build is rejected.

use crate::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::ConfigurationError;
use crate::Environment;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl Environment {
    /// Load and validate the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigurationError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        let mut figment = Figment::from(Serialized::defaults(Self::compiled()));
        if let Some(file) = &file {
            debug!("Merging configuration file: {}", file.display());
            figment = figment.merge(Toml::file(file));
        } else {
            debug!("No configuration file, using compiled {} values", Self::compiled().mode());
        }
        figment = figment.merge(env_provider());

        let env = Self::extract(figment, Self::compiled().production)?;
        info!(mode = %env.mode(), api_server_url = %env.api_server_url, "Environment loaded");
        Ok(env)
    }

    /// Merge an in-memory TOML document over the compiled variant.
    pub fn load_from_str(toml: &str) -> Result<Self, ConfigurationError> {
        let figment = Figment::from(Serialized::defaults(Self::compiled())).merge(Toml::string(toml));
        Self::extract(figment, Self::compiled().production)
    }

    /// Apply `COFFEE_SHOP_*` overrides to an existing value.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        let figment = Figment::from(Serialized::defaults(self.clone())).merge(env_provider());
        *self = Self::extract(figment, self.production)?;
        Ok(())
    }

    /// Example configuration file holding the compiled values
    pub fn generate_example() -> Result<String, ConfigurationError> {
        toml::to_string_pretty(&Self::compiled()).map_err(|e| ConfigurationError::SerializeError {
            details: e.to_string(),
        })
    }

    fn extract(figment: Figment, production: bool) -> Result<Self, ConfigurationError> {
        let env: Self = figment.extract()?;
        if env.production != production {
            return Err(ConfigurationError::InvalidValue {
                field: "production",
                value: env.production.to_string(),
                reason: format!("fixed to {production} by the build variant"),
            });
        }
        env.validate()?;
        Ok(env)
    }
}

fn env_provider() -> Env {
    // COFFEE_SHOP_CONFIG names the file itself and COFFEE_SHOP_PROD_* are
    // build-time inputs.
    Env::prefixed(ENV_PREFIX)
        .split("__")
        .filter(|key| {
            let key = key.as_str();
            key != "config" && key != "production" && !key.starts_with("prod_")
        })
}
