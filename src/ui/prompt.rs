//! Secret input prompts

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Password;

use crate::error::{ContextError, Result};

/// Ask for a secret. Hidden input on a terminal, otherwise one line from stdin.
pub fn prompt_for_secret(prompt: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let secret = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        return Ok(secret);
    }

    eprint!("{}: ", prompt);
    io::stderr()
        .flush()
        .map_err(|e| ContextError::Prompt(e.to_string()))?;
    read_secret_line(io::stdin().lock())
}

/// Read one line and strip surrounding whitespace
fn read_secret_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ContextError::Prompt(e.to_string()))?;
    if read == 0 {
        return Err(ContextError::Prompt("no input on stdin".to_string()));
    }
    Ok(line.trim().to_string())
}
