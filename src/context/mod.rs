//! Context management module
//!
//! Named contexts bundle a Nomad address with an ACL token. Addresses live in
//! a JSON document, tokens in the OS credential vault.

mod commands;
mod manager;
mod models;
mod store;

pub use commands::run_context_command;
pub use manager::ContextManager;
pub use models::{Context, ContextConfig};
pub use store::ContextStore;
