//! Launcher dispatch: announce, run the entry point, then pause.
mod dispatch;
mod exit;
mod pause;

use std::process::ExitStatus;

use tokio::io::{self, AsyncBufRead, AsyncWrite, BufReader};
use tracing::{debug, warn};

use crate::{cli::LaunchProfile, launcher::config::LauncherConfig};

pub use dispatch::{announce, invoke, Dispatch, DEFAULT_NOTICE};
pub use exit::{LauncherExit, LauncherStatus};
pub use pause::{wait_for_acknowledgment, PAUSE_PROMPT};

/// Run one launcher invocation against the process console.
///
/// The pause is reached whatever happens to the entry point.
pub async fn run(profile: LaunchProfile) -> LauncherStatus {
    let mut stdout = io::stdout();
    let status = match launch(&profile, &mut stdout).await {
        Ok(status) => LauncherStatus::from_exit_status(status),
        Err(exit) => exit.report(),
    };
    pause_console(&mut stdout).await;
    status
}

/// Report a failure that happened before a profile existed, then pause.
pub async fn abort(exit: LauncherExit) -> LauncherStatus {
    let status = exit.report();
    pause_console(&mut io::stdout()).await;
    status
}

/// Announce the dispatch branch, resolve the entry point and run it.
pub async fn launch<W>(profile: &LaunchProfile, writer: &mut W) -> Result<ExitStatus, LauncherExit>
where
    W: AsyncWrite + Unpin,
{
    let dispatch = Dispatch::from_input_dir(profile.input_dir());
    if profile.ignored_args > 0 {
        debug!(
            target: "notes_launcher::dispatch",
            ignored = profile.ignored_args,
            "Ignoring arguments after the notes directory"
        );
    }

    // Console failures are logged only; the entry point still runs.
    if let Err(err) = announce(writer, &dispatch, &profile.program_name).await {
        warn!(
            target: "notes_launcher::dispatch",
            reason = %err,
            "Could not print status lines"
        );
    }

    let config = LauncherConfig::load(profile.config_path.clone(), profile.config_source)
        .map_err(LauncherExit::from_error)?;

    invoke(&config.entry_point, &dispatch)
        .await
        .map_err(LauncherExit::from_error)
}

async fn pause_console<W>(writer: &mut W)
where
    W: AsyncWrite + Unpin,
{
    let mut stdin = BufReader::new(io::stdin());
    pause_with(&mut stdin, writer).await;
}

async fn pause_with<R, W>(reader: &mut R, writer: &mut W)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(err) = wait_for_acknowledgment(reader, writer).await {
        warn!(
            target: "notes_launcher::dispatch",
            reason = %err,
            "Could not wait for acknowledgment"
        );
    }
}
