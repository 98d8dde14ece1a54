use std::{
    path::PathBuf,
    process::{Command, Output, Stdio},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_notes-launcher");
pub const CONFIG_ENV: &str = "NOTES_LAUNCHER_CONFIG";

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run the launcher with `config` and `args`; stdin is closed so the pause returns at once.
pub fn run_launcher(config: &str, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .env(CONFIG_ENV, fixture(config))
        .env("RUST_LOG", "off")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("launcher process should start")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
