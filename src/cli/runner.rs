//! CLI runner - executes a full inference run

use crate::batch::BatchProcessor;
use crate::cli::commands::Cli;
use crate::error::{Error, Result};
use crate::output::SchemaWriter;
use crate::samples;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run schema inference end to end.
    ///
    /// A missing samples directory is fatal and aborts before any
    /// processing. An empty samples directory ends the run gracefully
    /// with no outputs.
    pub fn run(&self) -> Result<()> {
        if !self.cli.samples_dir.is_dir() {
            return Err(Error::samples_dir_not_found(
                self.cli.samples_dir.display().to_string(),
            ));
        }

        let groups = samples::discover(&self.cli.samples_dir)?;
        if groups.is_empty() {
            println!(
                "No sample files found in {}",
                self.cli.samples_dir.display()
            );
            return Ok(());
        }

        let file_count: usize = groups.iter().map(|group| group.files.len()).sum();
        println!("Found {file_count} sample files");
        println!();
        println!("Processing {} unique endpoints...", groups.len());
        println!();

        let processor = BatchProcessor::new().with_format_detection(self.cli.detect_formats);
        let (document, tally) = processor.process(&groups);

        let writer = SchemaWriter::new(&self.cli.output_dir)?;
        let combined_path = writer.write_document(&document)?;

        for entry in &document.entries {
            println!(
                "  {} -> {} ({})",
                entry.endpoint, entry.name, entry.response_type
            );
        }

        println!();
        println!("{}", "=".repeat(50));
        println!("SCHEMA INFERENCE COMPLETE");
        println!("{}", "=".repeat(50));
        println!("Total schemas: {}", document.combined.len());
        println!("Output directory: {}", self.cli.output_dir.display());
        println!();
        println!("Response types detected:");
        for (response_type, count) in tally.sorted() {
            println!("  {response_type}: {count}");
        }
        println!();
        println!("Combined schemas: {}", combined_path.display());

        Ok(())
    }
}
