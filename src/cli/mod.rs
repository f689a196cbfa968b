//! CLI argument parsing

mod context;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use context::{
    CtxAction, DeleteContextArgs, ListContextsArgs, OutputFormat, SetContextArgs,
    ShowContextArgs, UseContextArgs,
};

/// Manage Nomad CLI contexts or proxy commands to nomad
#[derive(Parser, Debug)]
#[command(name = "nomad-context")]
#[command(version)]
#[command(about = "Manage Nomad CLI contexts or proxy commands to nomad", long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(after_help = "Any other command is passed to nomad with NOMAD_ADDR and NOMAD_TOKEN \
    taken from the current context:\n  nomad-context job status")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, env = defaults::LOG_ENV_VAR)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage saved Nomad contexts
    Ctx {
        #[command(subcommand)]
        action: CtxAction,
    },

    /// Forwarded verbatim to nomad
    #[command(external_subcommand)]
    Nomad(Vec<String>),
}
