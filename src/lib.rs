//! nomad-context - named contexts for the Nomad CLI
//!
//! Keeps a set of Nomad cluster addresses in a small JSON document and their
//! ACL tokens in the OS credential vault, then runs `nomad` with the current
//! context's `NOMAD_ADDR` and `NOMAD_TOKEN` injected.
//!
//! # Example
//!
//! ```bash
//! # Save a context (the first one becomes current)
//! nomad-context ctx set dev --addr https://nomad.dev:4646 --prompt-token
//!
//! # Switch and inspect
//! nomad-context ctx use prod
//! nomad-context ctx list
//!
//! # Anything else is forwarded to nomad
//! nomad-context job status
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod proxy;
pub mod secrets;
pub mod ui;

pub use cli::{Cli, Command, CtxAction, OutputFormat};
pub use context::{run_context_command, Context, ContextConfig, ContextManager, ContextStore};
pub use error::{ContextError, Result};
pub use proxy::{build_environment, run_nomad, run_nomad_with};
pub use secrets::{KeyringStore, MemoryStore, SecretError, SecretStore};
