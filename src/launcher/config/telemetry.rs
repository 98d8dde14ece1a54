use tracing::{debug, info};

use crate::cli::{ConfigSource, CONFIG_ENV, DEFAULT_CONFIG};

use super::LauncherConfig;

pub fn log_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Default => debug!(
            target: "notes_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV,
            default = DEFAULT_CONFIG,
            "NOTES_LAUNCHER_CONFIG not set; using optional default launcher.toml"
        ),
        other => info!(
            target: "notes_launcher::config",
            path = %path.display(),
            source = other.as_str(),
            "Loading launcher configuration"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "notes_launcher::config",
        path = %config.source_path.display(),
        program = %config.entry_point.program,
        args = ?config.entry_point.args,
        working_dir = ?config.entry_point.working_dir,
        "Launcher configuration resolved"
    );
}
