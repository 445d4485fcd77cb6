use anyhow::Result;
use clap::{Parser, Subcommand};

mod compare;
mod matches;
mod sort;

use compare::CompareArgs;
use matches::MatchArgs;
use sort::SortArgs;

#[derive(Parser, Debug)]
#[command(name = "conda-vercmp", version, about = "Conda version ordering and match spec evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two versions and print <, = or >
    Compare(CompareArgs),

    /// Test a version against a match spec expression
    Match(MatchArgs),

    /// Sort versions in conda order
    Sort(SortArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Compare(args) => compare::execute(args)?,
        Commands::Match(args) => matches::execute(args)?,
        Commands::Sort(args) => sort::execute(args)?,
    };

    std::process::exit(code);
}
