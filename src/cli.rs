use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Codeforces profile statistics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Look up one handle and print its report
    Stats {
        /// Codeforces handle
        handle: String,
        /// Print the report as JSON instead of charts
        #[arg(long)]
        json: bool,
        /// Also run the delayed analysis (terminal report only)
        #[arg(long, conflicts_with = "json")]
        analysis: bool,
    },
    /// Interactive session: type a handle, `retry`, `analysis` or `quit`
    Shell,
    /// Start the stats server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
