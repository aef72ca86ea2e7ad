//! Resume Conversion - Main entry point
//!
//! Reads a raw resume record as JSON, converts it, and writes the
//! template-ready document as JSON for a template renderer to consume.

use anyhow::{Context, Result};
use clap::Parser;
use resume_conversion::{Config, Process, ProcessConfig};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "resume-conversion",
    about = "Convert a raw resume record into a template-ready document",
    version
)]
struct Cli {
    /// JSON file containing the raw resume record
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the document (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            resume_conversion::telemetry::init(&Config::default().log_level);
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    resume_conversion::telemetry::init(&config.log_level);
    info!("Configuration loaded successfully");

    let contents = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let data: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", cli.input.display()))?;

    let process = Process::new(ProcessConfig::from_config(&config));
    let document = match process.run_with(&data) {
        Ok(document) => document,
        Err(e) => {
            error!("Failed to convert {}: {}", cli.input.display(), e);
            return Err(e.into());
        }
    };

    let rendered = serde_json::to_string_pretty(&document)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Document written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
