// src/bin/linkrank.rs
use std::process;

use clap::Parser;
use colored::Colorize;

use linkrank_core::cli::{self, Cli};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land on stdout and exit cleanly; real
            // argument errors land on stderr and fail.
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = cli::handle_rank(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
