//! CLI argument definitions and `LaunchProfile` construction.
use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser};

use super::{resolve_config_path, LaunchProfile};

/// Command-line arguments.
///
/// Only long flags are recognised, and only before the notes directory. From
/// the first positional on, every token is data: the first is the notes
/// directory, the rest are ignored.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Run the note classification pipeline on a notes directory",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Path to launcher.toml (overrides NOTES_LAUNCHER_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
    /// Directory of input notes; the pipeline default is used when omitted.
    /// Anything after it is accepted and ignored.
    #[arg(
        value_name = "PATH_TO_INPUT_NOTES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub positionals: Vec<OsString>,
}

impl LauncherArgs {
    /// The notes directory, if one was given.
    pub fn input_dir(&self) -> Option<&OsString> {
        self.positionals.first()
    }

    /// Number of tokens after the notes directory.
    pub fn ignored_count(&self) -> usize {
        self.positionals.len().saturating_sub(1)
    }

    /// Build a `LaunchProfile` from CLI args and environment variables.
    ///
    /// `program_name` is the token the launcher was invoked as (argv[0]).
    pub fn into_profile(self, program_name: OsString) -> Result<LaunchProfile> {
        let ignored_args = self.ignored_count();
        let (config_path, config_source) = resolve_config_path(self.config_override)?;

        Ok(LaunchProfile {
            program_name,
            input_dir: self.positionals.into_iter().next(),
            config_path,
            config_source,
            ignored_args,
        })
    }
}
