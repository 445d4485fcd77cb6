//! Match command - evaluate a match spec against one or more versions.

use anyhow::Result;
use clap::Args;
use conda_vercmp::MatchSpec;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Match spec expression, e.g. ">=1.0,<2.0|==3.1"
    pub spec: String,

    /// Versions to test
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Print only the matching versions
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn execute(args: MatchArgs) -> Result<i32> {
    let spec = MatchSpec::new(&args.spec);
    let mut any_match = false;

    for version in &args.versions {
        let matched = spec.matches(version);
        any_match |= matched;

        if args.quiet {
            if matched {
                println!("{version}");
            }
        } else {
            println!("{version} {} {spec}", if matched { "matches" } else { "does not match" });
        }
    }

    Ok(if any_match { 0 } else { 1 })
}
