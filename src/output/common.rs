//! Common utilities for output formatters

use serde::Serialize;

use crate::error::{ContextError, Result};

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    let yaml = serde_yml::to_string(data)
        .map_err(|e| ContextError::Config(format!("Failed to serialize YAML: {}", e)))?;
    print!("{}", yaml);
    Ok(())
}

/// Whether stdout should carry ANSI colors
pub fn use_color() -> bool {
    use std::io::IsTerminal;

    let no_color = matches!(std::env::var_os("NO_COLOR"), Some(v) if !v.is_empty());
    !no_color && std::io::stdout().is_terminal()
}
