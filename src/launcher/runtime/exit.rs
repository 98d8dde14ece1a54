use std::process::{ExitCode, ExitStatus};

use anyhow::Error;
use tracing::error;

/// Status the launcher process finishes with.
///
/// Holds the entry point's raw code so nothing is translated on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherStatus(i32);

impl LauncherStatus {
    pub const SUCCESS: Self = Self(0);
    pub const FAILURE: Self = Self(1);

    /// Mirror the entry point's exit status. A signal termination has no code and maps to 1.
    pub fn from_exit_status(status: ExitStatus) -> Self {
        status.code().map(Self).unwrap_or(Self::FAILURE)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    /// Convert into the value `main` returns.
    ///
    /// On Windows a code outside `0..=255` ends the process right here with
    /// the raw value, since `ExitCode` can only carry a byte.
    pub fn into_exit_code(self) -> ExitCode {
        match u8::try_from(self.0) {
            Ok(code) => ExitCode::from(code),
            Err(_) => exit_with_raw_code(self.0),
        }
    }
}

#[cfg(windows)]
fn exit_with_raw_code(code: i32) -> ExitCode {
    std::process::exit(code)
}

// Unix exit codes are a single byte, so this only sees values no child can produce.
#[cfg(not(windows))]
fn exit_with_raw_code(_code: i32) -> ExitCode {
    ExitCode::FAILURE
}

/// Bundles a launcher failure message with the status it maps to.
#[derive(Debug)]
pub struct LauncherExit {
    message: String,
    status: LauncherStatus,
}

impl LauncherExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: err.to_string(),
            status: LauncherStatus::FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn report(self) -> LauncherStatus {
        error!(target: "notes_launcher::dispatch", reason = %self.message, "Launcher failed");
        eprintln!("{}", self.message);
        self.status
    }
}
