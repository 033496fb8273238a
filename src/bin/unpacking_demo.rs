// Unpacking Demo
// Walks through tuple, sequence, nested, swap, and rest destructuring.
//
// Run with: cargo run --bin unpacking_demo

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use lazy_unpacking::config::UnpackArgs;
use lazy_unpacking::logging;
use lazy_unpacking::unpacking::run_unpacking_demo;
use std::io::{self, Write};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _args = UnpackArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_unpacking_demo(&mut out).context("running unpacking demo")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
