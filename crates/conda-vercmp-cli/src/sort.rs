//! Sort command - order versions, from arguments or stdin.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort (reads stdin, one per line, when omitted)
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(short = 'r', long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    let versions = if args.versions.is_empty() {
        read_stdin().context("failed to read versions from stdin")?
    } else {
        args.versions
    };

    let refs: Vec<&str> = versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        conda_vercmp::rsort(&refs)
    } else {
        conda_vercmp::sort(&refs)
    };

    for version in &sorted {
        println!("{version}");
    }

    // Invalid versions are dropped from the output.
    Ok(if sorted.len() == refs.len() { 0 } else { 1 })
}

fn read_stdin() -> io::Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            versions.push(trimmed.to_string());
        }
    }
    Ok(versions)
}
