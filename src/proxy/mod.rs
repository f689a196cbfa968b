//! Command proxy
//!
//! Anything that is not a context command is handed to the nomad CLI with
//! the current context's address and token injected into its environment.

mod env;
mod runner;

pub use env::{build_environment, EnvPair};
pub use runner::{run_nomad, run_nomad_with};
