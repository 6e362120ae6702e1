//! Demo settings: optional JSON config file plus `SPLITPANE_*` overrides.

use std::fmt;
use std::io;
use std::path::PathBuf;

use splitpane_core::{Orientation, SplitConfig, SplitConfigError};

/// Environment variable naming a log file; logging is off when unset.
pub const LOG_ENV: &str = "SPLITPANE_LOG";
/// Environment override for the initial orientation (`horizontal`/`vertical`).
pub const ORIENTATION_ENV: &str = "SPLITPANE_ORIENTATION";
/// Environment override for the initial ratio.
pub const RATIO_ENV: &str = "SPLITPANE_RATIO";

/// Resolved demo settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub split: SplitConfig,
    pub log_file: Option<PathBuf>,
}

/// Errors raised while loading settings.
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Config(SplitConfigError),
    MissingArgument(&'static str),
    InvalidOverride { name: &'static str, value: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Config(error) => write!(f, "{error}"),
            Self::MissingArgument(flag) => write!(f, "{flag} requires a value"),
            Self::InvalidOverride { name, value } => {
                write!(f, "invalid value {value:?} for {name}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(error) => Some(error),
            Self::MissingArgument(_) | Self::InvalidOverride { .. } => None,
        }
    }
}

impl From<SplitConfigError> for SettingsError {
    fn from(error: SplitConfigError) -> Self {
        Self::Config(error)
    }
}

impl DemoSettings {
    /// Load from process arguments and environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::resolve(std::env::args().skip(1), |name| std::env::var(name).ok())
    }

    /// Resolve settings from explicit arguments and an environment lookup.
    pub fn resolve(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut config_path = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                config_path = Some(PathBuf::from(
                    args.next().ok_or(SettingsError::MissingArgument("--config"))?,
                ));
            }
        }

        let mut split = match config_path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| SettingsError::Io { path, source })?;
                SplitConfig::from_json_str(&text)?
            }
            None => SplitConfig::default(),
        };

        if let Some(value) = env(ORIENTATION_ENV) {
            split.orientation = match value.to_ascii_lowercase().as_str() {
                "horizontal" => Orientation::Horizontal,
                "vertical" => Orientation::Vertical,
                _ => {
                    return Err(SettingsError::InvalidOverride {
                        name: ORIENTATION_ENV,
                        value,
                    });
                }
            };
        }
        if let Some(value) = env(RATIO_ENV) {
            split.ratio = value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidOverride {
                    name: RATIO_ENV,
                    value: value.clone(),
                })?;
        }

        Ok(Self {
            split,
            log_file: env(LOG_ENV).map(PathBuf::from),
        })
    }
}
