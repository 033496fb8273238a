// Random Number Printer
// Prints values pulled from an infinite lazy sequence of random numbers.
//
// Run with: cargo run --bin random_numbers -- [--count N] [--seed S] [--shared]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use lazy_unpacking::config::RandomArgs;
use lazy_unpacking::logging;
use lazy_unpacking::random_numbers::print_random_numbers;
use std::io::{self, Write};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = RandomArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_random_numbers(&mut out, args.count, args.settings())
        .context("printing random numbers")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
