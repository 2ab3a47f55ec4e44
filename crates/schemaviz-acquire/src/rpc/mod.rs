mod client;

use async_trait::async_trait;
use serde_json::json;

use schemaviz_core::{DatabaseSchema, Error, Result};

use crate::adapter::Acquire;
use client::RpcClient;

/// Fetches a schema from a live server over the line-oriented RPC protocol.
///
/// The two calls are sequential: `list_dbs` first, to confirm the requested
/// database exists, then `get_schema` for the document itself.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    address: String,
    database: String,
}

impl RemoteSource {
    pub fn new(address: String, database: String) -> Self {
        Self { address, database }
    }
}

#[async_trait]
impl Acquire for RemoteSource {
    fn mode(&self) -> &'static str {
        "rpc"
    }

    async fn acquire(&self) -> Result<DatabaseSchema> {
        // The client owns the socket and its reader task; dropping it on any
        // exit path below releases both.
        let mut client = RpcClient::connect(&self.address).await?;

        let databases: Vec<String> = client.call("list_dbs", json!([])).await?;
        if !databases.iter().any(|name| name == &self.database) {
            return Err(Error::DatabaseNotFound {
                requested: self.database.clone(),
                available: databases,
            });
        }

        client.call("get_schema", json!([self.database])).await
    }
}
