use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths};

pub const DEFAULT_PROGRAM: &str = "python";
pub const DEFAULT_ARGS: [&str; 2] = ["-m", "src.main"];

/// How the notes pipeline entry point is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointSection {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Default for EntryPointSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|arg| arg.to_string()).collect(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawEntryPointSection {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub working_dir: Option<PathBuf>,
}

pub fn parse_entry_point_section(
    raw: Option<RawEntryPointSection>,
    path: &Path,
) -> Result<EntryPointSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = EntryPointSection::default();

    let program = raw.program.unwrap_or(defaults.program);
    if program.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "entry_point.program",
            message: "Name the program that runs the notes pipeline".into(),
        });
    }

    let working_dir = match raw.working_dir {
        Some(dir) if paths::is_empty(&dir) => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "entry_point.working_dir",
                message: "Remove the key or point it at a directory".into(),
            })
        }
        Some(dir) => Some(paths::resolve_against(&paths::config_base_dir(path), &dir)),
        None => None,
    };

    Ok(EntryPointSection {
        program,
        args: raw.args.unwrap_or(defaults.args),
        working_dir,
    })
}
