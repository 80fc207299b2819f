mod cmd;
mod logging;
mod tui;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "agecalc", version, about = "Terminal birth-date age calculator")]
struct Cli {
    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute ages for one or more birth dates and exit
    Calc(CalcArgs),

    /// Interactive calculator form (the default when no subcommand is given)
    Tui,
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Birth dates in YYYY-MM-DD form
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Reference date to compute against instead of the current date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    match cli.command {
        Some(Commands::Calc(args)) => cmd::calc::run(&args),
        Some(Commands::Tui) | None => {
            if let Err(e) = tui::run() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
