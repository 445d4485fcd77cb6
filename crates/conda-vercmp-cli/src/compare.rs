//! Compare command - order two version strings.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use conda_vercmp::compare_evr;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left version
    pub left: String,

    /// Right version
    pub right: String,

    /// Exit non-zero unless the versions compare equal
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let ordering = compare_evr(&args.left, &args.right);

    if !args.quiet {
        let sign = match ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        println!("{} {} {}", args.left, sign, args.right);
    }

    Ok(if ordering == Ordering::Equal { 0 } else { 1 })
}
