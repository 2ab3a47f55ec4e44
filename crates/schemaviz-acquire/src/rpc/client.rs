use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;

use schemaviz_core::{Error, Result};

#[derive(Debug, Serialize)]
struct Request<'a> {
    method: &'a str,
    params: &'a Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct Response {
    id: u64,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Value,
}

type PendingCalls = Arc<Mutex<HashMap<u64, oneshot::Sender<Response>>>>;

/// Line-oriented request/response client over a plain TCP stream.
///
/// One background task reads response frames and routes them to pending calls
/// by request id. Dropping the client aborts that task and closes the socket,
/// so the connection is released on every exit path.
pub(crate) struct RpcClient {
    writer: OwnedWriteHalf,
    pending: PendingCalls,
    reader: JoinHandle<()>,
    next_id: u64,
}

impl RpcClient {
    pub async fn connect(address: &str) -> Result<Self> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(Error::Connection)?;
        let (read_half, writer) = stream.into_split();
        let pending: PendingCalls = Arc::new(Mutex::new(HashMap::new()));
        let reader = tokio::spawn(dispatch_responses(read_half, Arc::clone(&pending)));

        Ok(Self {
            writer,
            pending,
            reader,
            next_id: 0,
        })
    }

    /// Send one request and wait for its response or for the session to die.
    ///
    /// The response payload is decoded into `T`; a remote error payload or an
    /// undecodable payload surfaces as [`Error::Rpc`].
    pub async fn call<T: DeserializeOwned>(&mut self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(event = "rpc_call", method, id);

        let (sender, receiver) = oneshot::channel();
        self.pending.lock().await.insert(id, sender);

        let mut frame = serde_json::to_vec(&Request {
            method,
            params: &params,
            id,
        })
        .map_err(|err| Error::Rpc(format!("encoding {method} request: {err}")))?;
        frame.push(b'\n');

        if self.writer.write_all(&frame).await.is_err() {
            self.pending.lock().await.remove(&id);
            return Err(Error::NotConnected);
        }

        let response = receiver.await.map_err(|_| Error::NotConnected)?;
        if !response.error.is_null() {
            return Err(Error::Rpc(format!("{method} failure - {}", response.error)));
        }

        serde_json::from_value(response.result)
            .map_err(|err| Error::Rpc(format!("malformed {method} response: {err}")))
    }
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

async fn dispatch_responses(read_half: OwnedReadHalf, pending: PendingCalls) {
    let mut lines = BufReader::new(read_half).lines();

    loop {
        let frame = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };
        if frame.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Response>(&frame) {
            Ok(response) => {
                if let Some(sender) = pending.lock().await.remove(&response.id) {
                    let _ = sender.send(response);
                }
            }
            // An unparseable frame means we can no longer trust our position
            // in the stream; tear the session down.
            Err(_) => break,
        }
    }

    // Dropped senders surface as NotConnected to waiting callers.
    pending.lock().await.clear();
}
