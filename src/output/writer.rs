//! Schema file writer

use crate::batch::{EndpointSchema, SchemaDocument};
use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the combined schema document
pub const COMBINED_FILE: &str = "_all_inferred_schemas.json";

/// Writes finalized schemas into an output directory
#[derive(Debug, Clone)]
pub struct SchemaWriter {
    dir: PathBuf,
}

impl SchemaWriter {
    /// Create a writer, creating the output directory as needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Output directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one endpoint's schema to `<endpoint>.json` as a single-key
    /// `{name: schema}` mapping
    pub fn write_endpoint(&self, entry: &EndpointSchema) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.json", entry.endpoint));
        let mut payload = Map::new();
        payload.insert(entry.name.clone(), entry.schema.clone());
        write_pretty(&path, &Value::Object(payload))?;
        Ok(path)
    }

    /// Write the combined name → schema document
    pub fn write_combined(&self, document: &SchemaDocument) -> Result<PathBuf> {
        let path = self.dir.join(COMBINED_FILE);
        write_pretty(&path, &document.combined)?;
        Ok(path)
    }

    /// Write the whole run: every per-endpoint file, then the combined
    /// file. Returns the combined file path.
    pub fn write_document(&self, document: &SchemaDocument) -> Result<PathBuf> {
        for entry in &document.entries {
            self.write_endpoint(entry)?;
        }
        self.write_combined(document)
    }
}

fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered)?;
    Ok(())
}
