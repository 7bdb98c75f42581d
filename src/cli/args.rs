// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "linkrank",
    version,
    about = "Weak components and PageRank over an adjacency-list graph"
)]
pub struct Cli {
    /// Input file: one `<source>TAB<target>...` adjacency line per row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Damping factor, strictly between 0 and 1
    #[arg(long, default_value_t = 0.85)]
    pub damping: f64,

    /// Stop after this many power iterations even if unconverged
    #[arg(long, default_value_t = 100)]
    pub max_iterations: usize,

    /// L1 convergence threshold between successive score vectors
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,

    /// Let dangling-node mass drain instead of redistributing it
    #[arg(long)]
    pub drop_dangling: bool,

    /// Order output by descending score instead of input order
    #[arg(long)]
    pub by_score: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report load and convergence details on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
