use crate::catalog::traits::PropertyRepository;
use crate::models::PropertyRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog stored as a JSON array of property records on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `records`, creating parent directories.
    pub async fn save(&self, records: &[PropertyRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!(path = %self.path.display(), count = records.len(), "💾 Saved catalog");
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for JsonFileRepository {
    async fn list(&self) -> Result<Vec<PropertyRecord>> {
        debug!(path = %self.path.display(), "Reading catalog file");

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed catalog {}", self.path.display()))?;

        info!(count = records.len(), "Loaded catalog from file");
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
