use crate::common::{run_launcher, stdout_lines};

const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

#[cfg(unix)]
#[test]
fn no_argument_uses_pipeline_default() {
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &[]);
    let lines = stdout_lines(&output);

    assert!(
        lines[0].starts_with("Usage: ") && lines[0].ends_with(" [path_to_input_notes]"),
        "usage line expected, got {lines:?}"
    );
    assert!(lines[0].contains("notes-launcher"), "{lines:?}");
    assert_eq!(lines[1], "Defaulting to internal input_notes folder...");
    // printf with an empty argument list prints the format once.
    assert_eq!(lines[2], "[]");
    assert!(!lines.iter().any(|line| line == "[--input-dir]"), "{lines:?}");
    assert_eq!(lines[3], PAUSE_PROMPT);
    assert!(output.status.success(), "status: {:?}", output.status);
}

#[cfg(unix)]
#[test]
fn path_with_spaces_is_forwarded_as_one_value() {
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &["my notes"]);
    let lines = stdout_lines(&output);

    assert_eq!(
        lines,
        vec![
            "Processing notes from: \"my notes\"".to_string(),
            "[--input-dir]".to_string(),
            "[my notes]".to_string(),
            PAUSE_PROMPT.to_string(),
        ]
    );
}

#[cfg(unix)]
#[test]
fn path_value_is_not_normalized() {
    let raw = "  ./Notes//2024/../Inbox ";
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &[raw]);
    let lines = stdout_lines(&output);

    assert_eq!(lines[0], format!("Processing notes from: \"{raw}\""));
    assert_eq!(lines[2], format!("[{raw}]"));
}

#[cfg(unix)]
#[test]
fn extra_arguments_are_ignored() {
    let with_extras = run_launcher(
        "tests/fixtures/launcher_printf.toml",
        &["notes", "second", "--verbose"],
    );
    let single = run_launcher("tests/fixtures/launcher_printf.toml", &["notes"]);

    assert_eq!(with_extras.stdout, single.stdout);
    assert_eq!(with_extras.status.code(), single.status.code());
}

#[cfg(unix)]
#[test]
fn entry_point_exit_code_passes_through_after_pause() {
    let output = run_launcher("tests/fixtures/launcher_exit_code.toml", &["notes"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.ends_with(&format!("{PAUSE_PROMPT}\n")), "{stdout}");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn missing_entry_point_still_pauses() {
    let output = run_launcher("tests/fixtures/launcher_missing_program.toml", &["notes"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.starts_with("Processing notes from: \"notes\"\n"), "{stdout}");
    assert!(stdout.contains(PAUSE_PROMPT), "{stdout}");
    assert!(
        stderr.contains("notes-pipeline-that-does-not-exist"),
        "stderr should name the program: {stderr}"
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_explicit_config_still_pauses() {
    let output = run_launcher("tests/fixtures/does_not_exist.toml", &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("Defaulting to internal input_notes folder..."), "{stdout}");
    assert!(stdout.contains(PAUSE_PROMPT), "{stdout}");
    assert!(stderr.contains("does_not_exist.toml"), "{stderr}");
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn launcher_flags_after_the_path_are_ignored() {
    let single = run_launcher("tests/fixtures/launcher_printf.toml", &["notes"]);

    for extra in ["--help", "--version", "--config", "-h", "-V"] {
        let output = run_launcher("tests/fixtures/launcher_printf.toml", &["notes", extra]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.stdout, single.stdout, "`notes {extra}`:\n{stdout}");
        assert_eq!(output.status.code(), single.status.code(), "`notes {extra}`");
        assert!(stdout.ends_with(&format!("{PAUSE_PROMPT}\n")), "`notes {extra}`:\n{stdout}");
    }
}

#[cfg(unix)]
#[test]
fn short_help_is_dispatched_as_a_path() {
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &["-h"]);
    let lines = stdout_lines(&output);

    assert_eq!(
        lines,
        vec![
            "Processing notes from: \"-h\"".to_string(),
            "[--input-dir]".to_string(),
            "[-h]".to_string(),
            PAUSE_PROMPT.to_string(),
        ]
    );
}

#[test]
fn usage_error_still_pauses() {
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &["--config"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.ends_with(&format!("{PAUSE_PROMPT}\n")), "{stdout}");
    assert!(stderr.contains("--config"), "{stderr}");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn long_help_prints_usage_without_dispatching() {
    let output = run_launcher("tests/fixtures/launcher_printf.toml", &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("PATH_TO_INPUT_NOTES"), "{stdout}");
    assert!(!stdout.contains("Processing notes from:"), "{stdout}");
    assert!(output.status.success(), "status: {:?}", output.status);
}
