use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    process::ExitStatus,
};

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{
    launcher::config::EntryPointSection,
    lib::{
        entry_point::{build_entry_point_command, EntryPointCommandConfig},
        errors::LaunchError,
        telemetry::InvocationSpan,
    },
};

pub const DEFAULT_NOTICE: &str = "Defaulting to internal input_notes folder...";

/// Which branch the launcher takes for the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No path given; the entry point picks its own notes directory.
    PipelineDefault,
    /// Forward this path through `--input-dir`.
    InputDir(OsString),
}

impl Dispatch {
    pub fn from_input_dir(input_dir: Option<&OsStr>) -> Self {
        match input_dir {
            Some(dir) => Dispatch::InputDir(dir.to_os_string()),
            None => Dispatch::PipelineDefault,
        }
    }

    pub fn input_dir(&self) -> Option<&OsStr> {
        match self {
            Dispatch::PipelineDefault => None,
            Dispatch::InputDir(dir) => Some(dir.as_os_str()),
        }
    }

    /// Status lines shown before the entry point starts, newline-terminated.
    pub fn status_lines(&self, program_name: &OsStr) -> Vec<Vec<u8>> {
        match self {
            Dispatch::PipelineDefault => {
                let mut usage = b"Usage: ".to_vec();
                usage.extend_from_slice(&os_bytes(program_name));
                usage.extend_from_slice(b" [path_to_input_notes]\n");
                vec![usage, format!("{DEFAULT_NOTICE}\n").into_bytes()]
            }
            Dispatch::InputDir(dir) => {
                let mut line = b"Processing notes from: \"".to_vec();
                line.extend_from_slice(&os_bytes(dir));
                line.extend_from_slice(b"\"\n");
                vec![line]
            }
        }
    }
}

/// Raw bytes of an OS string as the console should see them.
#[cfg(unix)]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(value.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    match value.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Print the status lines for `dispatch` and flush so they precede the entry point's output.
pub async fn announce<W>(
    writer: &mut W,
    dispatch: &Dispatch,
    program_name: &OsStr,
) -> Result<(), LaunchError>
where
    W: AsyncWrite + Unpin,
{
    for line in dispatch.status_lines(program_name) {
        writer.write_all(&line).await.map_err(LaunchError::console)?;
    }
    writer.flush().await.map_err(LaunchError::console)
}

/// Run the entry point to completion with inherited stdio.
pub async fn invoke(
    entry_point: &EntryPointSection,
    dispatch: &Dispatch,
) -> Result<ExitStatus, LaunchError> {
    let program = OsStr::new(&entry_point.program);
    let mut command = build_entry_point_command(
        EntryPointCommandConfig {
            program,
            args: &entry_point.args,
            working_dir: entry_point.working_dir.as_deref(),
        },
        dispatch.input_dir(),
    );

    let span = InvocationSpan::start(program, dispatch.input_dir().is_some());
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            span.finish("spawn_failed", None);
            return Err(LaunchError::Spawn {
                program: program.to_os_string(),
                source,
            });
        }
    };

    match child.wait().await {
        Ok(status) => {
            let label = if status.success() { "succeeded" } else { "failed" };
            span.finish(label, status.code());
            Ok(status)
        }
        Err(source) => {
            span.finish("wait_failed", None);
            Err(LaunchError::Wait {
                program: program.to_os_string(),
                source,
            })
        }
    }
}
