use std::io::Write;
use std::path::PathBuf;

use schemaviz_acquire::{AcquireOptions, acquire_schema};
use schemaviz_core::{Error, RefKind};

const SAMPLE: &str = r#"{"name":"T","version":"1","tables":{"A":{"columns":{"ref":{"type":{"key":{"refTable":"B"}}}},"isRoot":true},"B":{"columns":{}}}}"#;

fn file_options(path: PathBuf) -> AcquireOptions {
    AcquireOptions {
        schema_path: Some(path),
        ..Default::default()
    }
}

#[tokio::test]
async fn acquires_schema_from_a_local_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let schema = acquire_schema(&file_options(file.path().to_path_buf()))
        .await
        .expect("acquire from file");

    assert_eq!(schema.name, "T");
    let a = &schema.tables["A"];
    assert!(a.is_root);

    let references = a.columns["ref"].references();
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].kind, RefKind::Key);
    assert_eq!(references[0].table, "B");

    assert!(schema.tables["B"].columns.is_empty());
}

#[tokio::test]
async fn unreadable_file_is_an_io_error() {
    let missing = std::env::temp_dir().join("schemaviz-no-such-schema.json");
    let err = acquire_schema(&file_options(missing)).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn malformed_document_is_a_decode_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"{\"name\": \"T\"").expect("write fragment");

    let err = acquire_schema(&file_options(file.path().to_path_buf()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}
