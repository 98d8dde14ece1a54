//! Load and validate the launcher configuration.
use std::path::PathBuf;

use config::FileFormat;
use serde::Deserialize;
use tracing::error;

use crate::{cli::ConfigSource, lib::errors::ConfigError};

pub mod entry_point;
pub mod telemetry;

pub use entry_point::{
    parse_entry_point_section, EntryPointSection, RawEntryPointSection, DEFAULT_ARGS,
    DEFAULT_PROGRAM,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub entry_point: EntryPointSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    entry_point: Option<RawEntryPointSection>,
}

impl LauncherConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file is only an error when `source` names it explicitly; the
    /// default `launcher.toml` falls back to built-in values.
    pub fn load(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        telemetry::log_source(&path, source);

        let file = config::File::from(path.clone())
            .format(FileFormat::Toml)
            .required(source.is_required());
        let document = config::Config::builder()
            .add_source(file)
            .build()
            .map_err(|err| {
                let error = ConfigError::from_read_error(path.clone(), err);
                error!(
                    target: "notes_launcher::config",
                    path = %path.display(),
                    reason = %error,
                    "Failed to read configuration file"
                );
                error
            })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "notes_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "notes_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let entry_point = parse_entry_point_section(raw.entry_point, &path)?;
        Ok(Self {
            entry_point,
            source_path: path,
        })
    }
}
