use thiserror::Error;

/// Error taxonomy shared across schemaviz crates.
///
/// All acquisition failures are fatal; there is no retry or partial-success
/// mode. `DatabaseNotFound` is the one user-facing condition callers are
/// expected to special-case when reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or ambiguous acquisition mode.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The schema file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The schema document does not parse into the expected structure.
    #[error("schema decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The network dial failed; no remote calls were attempted.
    #[error("connection error: {0}")]
    Connection(std::io::Error),
    /// The remote peer terminated the session mid-call.
    #[error("not connected")]
    NotConnected,
    /// Any other remote-call failure: malformed response, remote error payload.
    #[error("rpc error: {0}")]
    Rpc(String),
    /// The requested database is not among those the server reports.
    #[error("database {requested} not found, available databases are {available:?}")]
    DatabaseNotFound {
        requested: String,
        available: Vec<String>,
    },
}

/// Convenience alias for results returned by schemaviz crates.
pub type Result<T> = std::result::Result<T, Error>;
