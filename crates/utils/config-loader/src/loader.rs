use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Environment variable prefix recognized by [`load_config`], e.g.
/// `PIPE__LOGGING__MAX_LEVEL=debug` overrides `logging.max_level`.
pub const ENV_PREFIX: &str = "PIPE";

/// Load configuration from a file, with prefixed environment variables
/// layered on top of the file values.
pub fn load_config<T>(path: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config_path = std::fs::canonicalize(PathBuf::from(path))
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;

    let settings = Config::builder()
        .add_source(File::from(config_path))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    settings.try_deserialize::<T>()
}
