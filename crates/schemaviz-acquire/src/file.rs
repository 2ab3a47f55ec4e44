use std::path::PathBuf;

use async_trait::async_trait;

use schemaviz_core::{DatabaseSchema, Result};

use crate::adapter::Acquire;

/// Reads a schema document from local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Acquire for FileSource {
    fn mode(&self) -> &'static str {
        "file"
    }

    async fn acquire(&self) -> Result<DatabaseSchema> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let schema = serde_json::from_str(&raw)?;
        Ok(schema)
    }
}
