//! Entry point for the notes launcher.
use std::{env, ffi::OsString, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use notes_launcher::{
    cli::LauncherArgs,
    launcher::runtime::{self, LauncherExit},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err}");
    }

    let argv: Vec<OsString> = env::args_os().collect();
    let program_name = argv
        .first()
        .cloned()
        .unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));

    let status = match LauncherArgs::try_parse_from(argv) {
        Ok(args) => match args.into_profile(program_name) {
            Ok(profile) => runtime::run(profile).await,
            Err(err) => runtime::abort(LauncherExit::from_error(err)).await,
        },
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match err.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(err) => runtime::abort(LauncherExit::from_error(err)).await,
    };

    status.into_exit_code()
}
