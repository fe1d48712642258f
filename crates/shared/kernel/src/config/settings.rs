use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the `motif` shell.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub logger: LoggerSettings,
    pub factory: FactorySettings,
}

/// Logging knobs, mapped onto `motif_logger::LoggerBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Directory for a log file; console only when unset.
    pub path: Option<PathBuf>,
    /// Emit file records as JSON lines.
    pub json: bool,
}

/// Which cars `motif drive` creates when no names are given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactorySettings {
    pub discriminators: Vec<String>,
}

// --- Default ---

impl Default for LoggerSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}

impl Default for FactorySettings {
    fn default() -> Self {
        Self {
            discriminators: ["RaceCar", "OffRoadCar", "TownCar"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}
