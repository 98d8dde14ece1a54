//! Shared helpers for building the notes entry point command.

use std::{ffi::OsStr, path::Path, process::Stdio};

use tokio::process::Command;

/// Option the entry point accepts to override its default notes directory.
pub const INPUT_DIR_FLAG: &str = "--input-dir";

pub struct EntryPointCommandConfig<'a> {
    pub program: &'a OsStr,
    pub args: &'a [String],
    pub working_dir: Option<&'a Path>,
}

/// Build the entry point command.
///
/// `input_dir` is appended as a single argument after [`INPUT_DIR_FLAG`], so
/// embedded whitespace survives on every platform.
pub fn build_entry_point_command(
    config: EntryPointCommandConfig<'_>,
    input_dir: Option<&OsStr>,
) -> Command {
    let mut command = Command::new(config.program);
    if let Some(dir) = config.working_dir {
        command.current_dir(dir);
    }
    command.args(config.args);

    if let Some(dir) = input_dir {
        command.arg(INPUT_DIR_FLAG).arg(dir);
    }

    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}
