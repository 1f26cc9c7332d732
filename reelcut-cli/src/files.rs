//! Shared file helpers for command implementations.

use eyre::{Result, WrapErr};
use serde::Serialize;
use std::path::Path;

/// Read an input file into a string with path context on failure.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Write a value as pretty JSON to `output`, or to stdout when absent.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => std::fs::write(path, json)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
