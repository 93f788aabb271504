// src/bin/pkgviz.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pkgviz_core::cli::{self, Cli};
use pkgviz_core::logger;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);
    let output = cli::run(&cli)?;
    print!("{output}");
    Ok(())
}
