//! UI utilities for terminal input

mod prompt;

pub use prompt::prompt_for_secret;
