mod settings;

pub use settings::{FactorySettings, LoggerSettings, ShellConfig};

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Base name of the configuration file looked up when no path is given (`motif.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "motif";

/// Prefix for environment overrides (`MOTIF__LOGGER__LEVEL=debug`).
pub const ENV_PREFIX: &str = "MOTIF";

#[motif_derive::motif_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a configuration file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **File**: the given `path` (must exist), or `motif.{toml,json,yaml,...}` in the
///    working directory if present. A missing default file is not an error.
/// 2. **Environment**: variables prefixed with `MOTIF__`, nested with `__`
///    (`MOTIF__FACTORY__DISCRIMINATORS=RaceCar,TownCar`). Comma-separated values are
///    parsed as lists for `factory.discriminators`.
///
/// Fields absent from every layer fall back to `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or any layer does not
/// match the shape of `T`.
///
/// # Example
/// ```rust,no_run
/// use motif_kernel::config::{load_config, ShellConfig};
///
/// let cfg: ShellConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.factory.discriminators.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => File::from(p.as_ref()).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let shown = path
        .as_ref()
        .map_or_else(|| DEFAULT_CONFIG_NAME.to_owned(), |p| p.as_ref().display().to_string());
    debug!(path = %shown, "Loading configuration");

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .list_separator(",")
                .with_list_parse_key("factory.discriminators")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
