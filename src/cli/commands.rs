//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Infer OpenAPI 3.0 schema definitions from JSON response samples
#[derive(Parser, Debug, Clone)]
#[command(name = "oas-infer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing JSON sample files
    #[arg(default_value = "samples")]
    pub samples_dir: PathBuf,

    /// Directory to write inferred schemas into
    #[arg(default_value = "schemas/inferred")]
    pub output_dir: PathBuf,

    /// Detect string formats (date-time, date, uri, email, uuid)
    #[arg(long)]
    pub detect_formats: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
