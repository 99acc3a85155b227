use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::forms::parking::LotSetupForm;

/// Configuration file read when `PARKING_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/parking.yaml";

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "PARKING";

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "PARKING_CONFIG";

/// Configuration options of the parking console.
///
/// Every key is optional. Capacities missing here are asked for interactively.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ParkingConfig {
    pub two_wheeler_capacity: Option<i32>,
    pub four_wheeler_capacity: Option<i32>,
    pub heavy_vehicle_capacity: Option<i32>,
}

impl ParkingConfig {
    /// Load the YAML file at `path` (if present) overlaid with `PARKING_*`
    /// environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// Load the YAML file at `path` overlaid with the given environment source.
    pub fn load_with_env(path: &str, env: Environment) -> Result<Self, ConfigError> {
        Self::builder(path).add_source(env).build()?.try_deserialize()
    }

    /// Environment source reading `PARKING_*` variables.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .try_parsing(true)
    }

    /// Configuration file path: the `PARKING_CONFIG` value when set, else the default.
    pub fn resolve_path(configured: Option<String>) -> String {
        configured
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load only the YAML file at `path`, ignoring the environment.
    pub fn load_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder(path).build()?.try_deserialize()
    }

    fn builder(path: &str) -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::new(path, FileFormat::Yaml).required(false))
    }

    /// Setup form for the lot when all three capacities are configured.
    pub fn lot_setup(&self) -> Option<LotSetupForm> {
        Some(LotSetupForm {
            two_wheeler_capacity: self.two_wheeler_capacity?,
            four_wheeler_capacity: self.four_wheeler_capacity?,
            heavy_vehicle_capacity: self.heavy_vehicle_capacity?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_has_no_lot_setup() {
        let config = ParkingConfig {
            two_wheeler_capacity: Some(3),
            four_wheeler_capacity: None,
            heavy_vehicle_capacity: Some(1),
        };
        assert!(config.lot_setup().is_none());
    }

    #[test]
    fn path_falls_back_to_default() {
        assert_eq!(ParkingConfig::resolve_path(None), DEFAULT_CONFIG_PATH);
        assert_eq!(ParkingConfig::resolve_path(Some(" ".into())), DEFAULT_CONFIG_PATH);
        assert_eq!(
            ParkingConfig::resolve_path(Some("lot.yaml".into())),
            "lot.yaml"
        );
    }

    #[test]
    fn missing_file_yields_empty_config() {
        let config = ParkingConfig::load_file("does/not/exist.yaml").unwrap();
        assert_eq!(config, ParkingConfig::default());
    }
}
