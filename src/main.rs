//! nomad-context - Main entry point

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use nomad_context::{run_context_command, run_nomad, Cli, Command, ContextManager};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors share exit status 1 with every other failure
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let manager = ContextManager::new()?;

    match command {
        Command::Ctx { action } => {
            debug!("Running context command");
            run_context_command(&manager, &action)?;
        }
        Command::Nomad(args) => {
            debug!("Forwarding {} argument(s) to nomad", args.len());
            run_nomad(&manager, &args)?;
        }
    }

    Ok(())
}
