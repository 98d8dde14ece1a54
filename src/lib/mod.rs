//! Shared library modules providing error types, path helpers, entry point commands, and telemetry initialization.

pub mod entry_point;
pub mod errors;
pub mod paths;
pub mod telemetry;
