//! Schema acquisition: local files and live servers behind one entry point.

pub mod adapter;
pub mod file;
pub mod options;
pub mod rpc;

pub use adapter::Acquire;
pub use file::FileSource;
pub use options::{AcquireOptions, SchemaSource};
pub use rpc::RemoteSource;

pub use schemaviz_core::DatabaseSchema;

use schemaviz_core::Result;

/// Acquire a schema using whichever mode `options` selects.
///
/// Exactly one mode must be configured; anything else fails with
/// [`schemaviz_core::Error::Config`] before any I/O happens.
pub async fn acquire_schema(options: &AcquireOptions) -> Result<DatabaseSchema> {
    match options.source()? {
        SchemaSource::File(path) => FileSource::new(path).acquire().await,
        SchemaSource::Remote { address, database } => {
            RemoteSource::new(address, database).acquire().await
        }
    }
}
