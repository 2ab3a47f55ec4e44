use std::path::PathBuf;

use schemaviz_core::{Error, Result};

/// Caller-supplied acquisition configuration.
///
/// Exactly one mode must be selected: either `schema_path`, or both `address`
/// and `database`.
#[derive(Debug, Clone, Default)]
pub struct AcquireOptions {
    pub schema_path: Option<PathBuf>,
    pub address: Option<String>,
    pub database: Option<String>,
}

/// A fully resolved acquisition mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    File(PathBuf),
    Remote { address: String, database: String },
}

impl SchemaSource {
    /// Short identifier for logging.
    pub fn mode_name(&self) -> &'static str {
        match self {
            SchemaSource::File(_) => "file",
            SchemaSource::Remote { .. } => "rpc",
        }
    }
}

impl AcquireOptions {
    /// Resolve the configured mode, rejecting ambiguous or incomplete input.
    pub fn source(&self) -> Result<SchemaSource> {
        match (&self.schema_path, &self.address, &self.database) {
            (Some(path), None, None) => Ok(SchemaSource::File(path.clone())),
            (None, Some(address), Some(database)) => Ok(SchemaSource::Remote {
                address: address.clone(),
                database: database.clone(),
            }),
            (Some(_), _, _) => Err(Error::Config(
                "cannot combine a schema file with a remote server".to_string(),
            )),
            (None, None, None) => Err(Error::Config(
                "select a schema file or a remote server".to_string(),
            )),
            (None, _, _) => Err(Error::Config(
                "remote mode needs both an address and a database name".to_string(),
            )),
        }
    }
}
