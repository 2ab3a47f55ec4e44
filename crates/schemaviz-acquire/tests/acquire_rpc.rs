use std::net::SocketAddr;

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use schemaviz_acquire::{AcquireOptions, acquire_schema};
use schemaviz_core::Error;

/// Serve one connection, answering each request with whatever `reply` returns
/// for its method. Returning `None` closes the connection without answering.
async fn spawn_server<F>(reply: F) -> SocketAddr
where
    F: Fn(&str) -> Option<Value> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let (read_half, mut write_half) = stream.into_split();
        let mut lines = BufReader::new(read_half).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            let request: Value = serde_json::from_str(&line).expect("parse request");
            let method = request["method"].as_str().unwrap_or_default();

            let Some(mut response) = reply(method) else {
                break;
            };
            response["id"] = request["id"].clone();

            let mut frame = response.to_string().into_bytes();
            frame.push(b'\n');
            write_half.write_all(&frame).await.expect("write response");
        }
    });

    addr
}

fn remote_options(addr: SocketAddr, database: &str) -> AcquireOptions {
    AcquireOptions {
        address: Some(addr.to_string()),
        database: Some(database.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn remote_acquisition_round_trip() {
    let addr = spawn_server(|method| match method {
        "list_dbs" => Some(json!({"result": ["Open_vSwitch"], "error": null})),
        "get_schema" => Some(json!({
            "result": {
                "name": "Open_vSwitch",
                "version": "8.3.0",
                "tables": {
                    "Bridge": {"columns": {"name": {"type": "string"}}}
                }
            },
            "error": null
        })),
        _ => None,
    })
    .await;

    let schema = acquire_schema(&remote_options(addr, "Open_vSwitch"))
        .await
        .expect("acquire over rpc");

    assert_eq!(schema.name, "Open_vSwitch");
    assert!(schema.tables.contains_key("Bridge"));
}

#[tokio::test]
async fn unknown_database_reports_available_names() {
    let addr = spawn_server(|method| match method {
        "list_dbs" => Some(json!({"result": ["x", "y"], "error": null})),
        _ => None,
    })
    .await;

    let err = acquire_schema(&remote_options(addr, "z")).await.unwrap_err();
    match err {
        Error::DatabaseNotFound {
            requested,
            available,
        } => {
            assert_eq!(requested, "z");
            assert_eq!(available, vec!["x".to_string(), "y".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn dial_failure_is_a_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = acquire_schema(&remote_options(addr, "any")).await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
}

#[tokio::test]
async fn peer_disconnect_mid_call_reports_not_connected() {
    let addr = spawn_server(|_method| None).await;

    let err = acquire_schema(&remote_options(addr, "any")).await.unwrap_err();
    assert!(matches!(err, Error::NotConnected));
}

#[tokio::test]
async fn remote_error_payload_is_an_rpc_error() {
    let addr = spawn_server(|method| match method {
        "list_dbs" => Some(json!({"result": null, "error": "permission denied"})),
        _ => None,
    })
    .await;

    let err = acquire_schema(&remote_options(addr, "db")).await.unwrap_err();
    assert!(matches!(err, Error::Rpc(_)));
}

#[tokio::test]
async fn malformed_response_payload_is_an_rpc_error() {
    let addr = spawn_server(|method| match method {
        "list_dbs" => Some(json!({"result": ["db"], "error": null})),
        "get_schema" => Some(json!({"result": 42, "error": null})),
        _ => None,
    })
    .await;

    let err = acquire_schema(&remote_options(addr, "db")).await.unwrap_err();
    assert!(matches!(err, Error::Rpc(_)));
}
