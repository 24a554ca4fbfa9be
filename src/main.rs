use anyhow::Result;

use cf_profile_stats::cli::Command;
use cf_profile_stats::{handle_completions, handle_serve, handle_shell, handle_stats, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats {
            handle,
            json,
            analysis,
        } => handle_stats(handle, *json, *analysis),
        Command::Shell => handle_shell(),
        Command::Serve { port } => handle_serve(*port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
