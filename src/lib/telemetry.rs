//! Telemetry initialization and entry point invocation span helpers.

use std::{ffi::OsStr, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so stdout carries only the status lines and whatever the
/// entry point prints.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one entry point invocation.
pub struct InvocationSpan {
    span: Span,
    started_at: Instant,
}

impl InvocationSpan {
    /// Start an invocation span.
    pub fn start(program: &OsStr, has_input_dir: bool) -> Self {
        let program = program.to_string_lossy();
        let span = info_span!(
            target: "notes_launcher::dispatch",
            "entry_point",
            program = %program,
            has_input_dir
        );
        {
            let _entered = span.enter();
            info!(target: "notes_launcher::dispatch", "Invoking entry point");
        }
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "notes_launcher::dispatch",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Entry point finished"
        );
    }
}
