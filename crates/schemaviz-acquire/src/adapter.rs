use async_trait::async_trait;

use schemaviz_core::{DatabaseSchema, Result};

/// Trait implemented by schema sources.
#[async_trait]
pub trait Acquire {
    /// Short mode identifier (e.g. `file`, `rpc`).
    fn mode(&self) -> &'static str;

    /// Fetch and decode the schema.
    async fn acquire(&self) -> Result<DatabaseSchema>;
}
