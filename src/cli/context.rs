//! Context management CLI arguments

use clap::{Parser, Subcommand, ValueEnum};

/// Subcommands for managing saved contexts
#[derive(Subcommand, Debug)]
pub enum CtxAction {
    /// List all stored contexts
    List(ListContextsArgs),

    /// Create or update a context
    Set(SetContextArgs),

    /// Switch the active context
    Use(UseContextArgs),

    /// Remove a stored context
    Delete(DeleteContextArgs),

    /// Display details for a context (defaults to current)
    Show(ShowContextArgs),
}

/// Output formats for 'ctx list'
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table with the current context marked (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Arguments for 'ctx list' subcommand
#[derive(Parser, Debug)]
pub struct ListContextsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'ctx set' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        nomad-context ctx set dev --addr https://nomad.dev:4646\n  \
        nomad-context ctx set prod --addr https://nomad.prod:4646 --token <TOKEN>\n  \
        nomad-context ctx set prod --prompt-token   # rotate the stored token")]
pub struct SetContextArgs {
    /// Context name
    pub name: String,
    /// Nomad server address, e.g. https://nomad.service:4646
    #[arg(long)]
    pub addr: Option<String>,
    /// Nomad ACL token to store securely
    #[arg(long)]
    pub token: Option<String>,
    /// Interactively prompt for the token (useful for rotation)
    #[arg(long, conflicts_with = "token")]
    pub prompt_token: bool,
}

/// Arguments for 'ctx use' subcommand
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to activate
    pub name: String,
}

/// Arguments for 'ctx delete' subcommand
#[derive(Parser, Debug)]
pub struct DeleteContextArgs {
    /// Context name to delete
    pub name: String,
}

/// Arguments for 'ctx show' subcommand
#[derive(Parser, Debug)]
pub struct ShowContextArgs {
    /// Context name (defaults to the current context)
    pub name: Option<String>,
}
