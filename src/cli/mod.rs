//! CLI module
//!
//! Command-line front end: reads sample files, runs inference, prints or
//! writes the resulting schema.
//!
//! # Commands
//!
//! - `infer` - Infer a schema from one sample file
//! - `unify` - Infer each sample file and unify the results

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{read_sample, render_schema, Runner};
