//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{FormatDetection, InferenceConfig};
use crate::error::{Error, Result};
use crate::schema::{unify, SchemaFragment, SchemaInferrer};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let inferrer = self.build_inferrer()?;

        let schema = match &self.cli.command {
            Commands::Infer { file } => self.infer(&inferrer, file)?,
            Commands::Unify { files } => self.unify(&inferrer, files)?,
        };

        self.write_schema(&schema)
    }

    /// Resolve the inferrer from the config file and flag overrides
    fn build_inferrer(&self) -> Result<SchemaInferrer> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading inference config from {}", path.display());
                InferenceConfig::from_file(path)?
            }
            None => InferenceConfig::default(),
        };

        if let Some(max_depth) = self.cli.max_depth {
            config.max_depth = max_depth;
        }
        if self.cli.no_formats {
            config.formats = FormatDetection::none();
        }
        config.validate()?;

        Ok(SchemaInferrer::from_config(&config))
    }

    fn infer(&self, inferrer: &SchemaInferrer, file: &Path) -> Result<SchemaFragment> {
        let sample = read_sample(file)?;
        let schema = inferrer.infer(&sample);
        info!("Inferred schema from {}", file.display());
        Ok(schema)
    }

    fn unify(&self, inferrer: &SchemaInferrer, files: &[PathBuf]) -> Result<SchemaFragment> {
        let fragments = files
            .iter()
            .map(|file| self.infer(inferrer, file))
            .collect::<Result<Vec<_>>>()?;

        info!("Unifying {} sample schemas", fragments.len());
        Ok(unify(fragments))
    }

    fn write_schema(&self, schema: &SchemaFragment) -> Result<()> {
        let text = render_schema(schema, self.cli.format)?;

        match &self.cli.output {
            Some(path) => {
                fs::write(path, format!("{text}\n"))?;
                info!("Wrote schema to {}", path.display());
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}

/// Read and parse one sample file. `-` reads stdin.
pub fn read_sample(path: &Path) -> Result<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::unreadable(path, e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| Error::unreadable(path, e))?
    };

    serde_json::from_str(&text).map_err(|e| Error::malformed(path, e))
}

/// Serialize a schema in the requested output format
pub fn render_schema(schema: &SchemaFragment, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(schema)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(schema)?,
    };
    Ok(text)
}
