//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LauncherArgs;
pub use profile::{resolve_config_path, ConfigSource, LaunchProfile, CONFIG_ENV, DEFAULT_CONFIG};
