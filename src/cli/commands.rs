//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer JSON Schema documents from sample JSON files
#[derive(Parser, Debug)]
#[command(name = "json-shape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inference configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum container nesting depth (overrides the config file)
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Disable string format detection
    #[arg(long, global = true)]
    pub no_formats: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Write the schema to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer a schema from one sample file
    Infer {
        /// Sample JSON file (`-` reads stdin)
        file: PathBuf,
    },

    /// Infer every sample file and unify the fragments into one
    Unify {
        /// Sample JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}
