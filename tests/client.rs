//! End-to-end tests of the reqwest client against a stand-in backend.

use alfred::board::{AssumeYes, Board, Outcome};
use alfred::client::{ClientConfig, ClientError, KnowledgeApi, KnowledgeClient, Operation};
use alfred::records::{Draft, Record, UploadFile};
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
struct ReceivedFile {
    field: String,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
struct ReceivedUpload {
    query: HashMap<String, String>,
    fields: Vec<(String, String)>,
    files: Vec<ReceivedFile>,
}

#[derive(Default)]
struct Backend {
    records: Vec<Record>,
    uploads: Vec<ReceivedUpload>,
    removals: Vec<String>,
    /// Respond to every call with this status instead
    fail_with: Option<StatusCode>,
    /// Raw body for `GET /get_data`
    raw_list: Option<String>,
    list_delay: Option<Duration>,
}

type Shared = Arc<Mutex<Backend>>;

async fn get_data(State(backend): State<Shared>) -> Response {
    let delay = backend.lock().unwrap().list_delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let backend = backend.lock().unwrap();
    if let Some(status) = backend.fail_with {
        return status.into_response();
    }
    if let Some(raw) = &backend.raw_list {
        return (StatusCode::OK, raw.clone()).into_response();
    }
    Json(backend.records.clone()).into_response()
}

async fn upload(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    mut multipart: Multipart,
) -> StatusCode {
    let mut received = ReceivedUpload {
        query,
        ..Default::default()
    };

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.unwrap().to_vec();
                received.files.push(ReceivedFile {
                    field: name,
                    file_name,
                    content_type,
                    bytes,
                });
            }
            None => {
                let text = field.text().await.unwrap();
                received.fields.push((name, text));
            }
        }
    }

    let mut backend = backend.lock().unwrap();
    if let Some(status) = backend.fail_with {
        return status;
    }
    let id = format!("doc-{}", backend.records.len() + 1);
    let name = received.query.get("namedoc").cloned().unwrap_or_default();
    let description = received
        .query
        .get("description_doc")
        .cloned()
        .unwrap_or_default();
    backend.records.push(Record::new(id, name, description));
    backend.uploads.push(received);
    StatusCode::OK
}

async fn remove_data(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> StatusCode {
    let mut backend = backend.lock().unwrap();
    if let Some(status) = backend.fail_with {
        return status;
    }
    let id = query.get("id").cloned().unwrap_or_default();
    backend.records.retain(|r| r.id != id);
    backend.removals.push(id);
    StatusCode::OK
}

async fn spawn_backend(backend: Backend) -> (KnowledgeClient, Shared) {
    let shared = Arc::new(Mutex::new(backend));

    let app = Router::new()
        .route("/get_data", get(get_data))
        .route("/upload", post(upload))
        .route("/remove_data", delete(remove_data))
        .with_state(Arc::clone(&shared));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = KnowledgeClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    (client, shared)
}

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("a", "Handbook", "Onboarding notes"),
        Record::new("b", "Policies", "HR policies"),
    ]
}

#[tokio::test]
async fn test_list_records() {
    let (client, _backend) = spawn_backend(Backend {
        records: sample_records(),
        ..Default::default()
    })
    .await;

    let records = client.list_records().await.unwrap();
    assert_eq!(records, sample_records());
}

#[tokio::test]
async fn test_list_non_success_status() {
    let (client, _backend) = spawn_backend(Backend {
        fail_with: Some(StatusCode::SERVICE_UNAVAILABLE),
        ..Default::default()
    })
    .await;

    match client.list_records().await {
        Err(ClientError::Status {
            operation, status, ..
        }) => {
            assert_eq!(operation, Operation::List);
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_decode_failure() {
    let (client, _backend) = spawn_backend(Backend {
        raw_list: Some("{\"not\": \"a list\"}".to_string()),
        ..Default::default()
    })
    .await;

    assert!(matches!(
        client.list_records().await,
        Err(ClientError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = KnowledgeClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    assert!(matches!(
        client.list_records().await,
        Err(ClientError::Unavailable)
    ));
}

#[tokio::test]
async fn test_request_timeout() {
    let (slow_client, _backend) = spawn_backend(Backend {
        list_delay: Some(Duration::from_secs(2)),
        ..Default::default()
    })
    .await;

    let client = KnowledgeClient::new(ClientConfig {
        base_url: slow_client.config().base_url.clone(),
        request_timeout: Some(Duration::from_millis(100)),
    })
    .unwrap();

    assert!(matches!(
        client.list_records().await,
        Err(ClientError::Timeout)
    ));
}

#[tokio::test]
async fn test_stalled_body_is_a_timeout() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Headers arrive promptly, the body never finishes
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let head = concat!(
            "HTTP/1.1 200 OK\r\n",
            "content-type: application/json\r\n",
            "content-length: 64\r\n\r\n[",
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
    });

    let client = KnowledgeClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout: Some(Duration::from_millis(200)),
    })
    .unwrap();

    assert!(matches!(
        client.list_records().await,
        Err(ClientError::Timeout)
    ));
}

#[tokio::test]
async fn test_upload_sends_query_fields_and_files() {
    let (client, backend) = spawn_backend(Backend::default()).await;

    let draft = Draft::new("Q&A notes", "a=b c/d")
        .file(UploadFile::new("guide.pdf", b"%PDF-1.4 guide".to_vec()))
        .file(UploadFile::new("notes.txt", b"plain notes".to_vec()));

    client.upload(&draft).await.unwrap();

    let backend = backend.lock().unwrap();
    assert_eq!(backend.uploads.len(), 1);
    let upload = &backend.uploads[0];

    assert_eq!(upload.query.get("namedoc").unwrap(), "Q&A notes");
    assert_eq!(upload.query.get("description_doc").unwrap(), "a=b c/d");
    assert_eq!(
        upload.fields,
        vec![
            ("namedoc".to_string(), "Q&A notes".to_string()),
            ("description_doc".to_string(), "a=b c/d".to_string()),
        ]
    );

    assert_eq!(upload.files.len(), 2);
    assert!(upload.files.iter().all(|f| f.field == "files"));
    assert_eq!(upload.files[0].file_name, "guide.pdf");
    assert_eq!(upload.files[0].content_type, "application/pdf");
    assert_eq!(upload.files[0].bytes, b"%PDF-1.4 guide");
    assert_eq!(upload.files[1].file_name, "notes.txt");
    assert_eq!(upload.files[1].bytes, b"plain notes");
}

#[tokio::test]
async fn test_upload_without_files() {
    let (client, backend) = spawn_backend(Backend::default()).await;

    client.upload(&Draft::new("Empty", "")).await.unwrap();

    let backend = backend.lock().unwrap();
    assert!(backend.uploads[0].files.is_empty());
    assert_eq!(backend.uploads[0].fields.len(), 2);
}

#[tokio::test]
async fn test_upload_failure_status() {
    let (client, _backend) = spawn_backend(Backend {
        fail_with: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Default::default()
    })
    .await;

    let err = client.upload(&Draft::new("Doc", "")).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to upload files (HTTP 500)");
}

#[tokio::test]
async fn test_remove_sends_id() {
    let (client, backend) = spawn_backend(Backend {
        records: sample_records(),
        ..Default::default()
    })
    .await;

    client.remove("a b&c").await.unwrap();
    client.remove("b").await.unwrap();

    let backend = backend.lock().unwrap();
    assert_eq!(backend.removals, vec!["a b&c".to_string(), "b".to_string()]);
    assert_eq!(backend.records, vec![Record::new("a", "Handbook", "Onboarding notes")]);
}

#[tokio::test]
async fn test_board_over_http() {
    let (client, backend) = spawn_backend(Backend {
        records: sample_records(),
        ..Default::default()
    })
    .await;

    let mut board = Board::new(client, AssumeYes);
    assert_eq!(board.load().await, Outcome::Completed);
    assert_eq!(board.view().cards.len(), 2);

    board.open_form();
    board.set_name("Runbook");
    board.set_description("On-call");
    assert_eq!(board.submit().await, Outcome::Completed);
    assert!(!board.is_dialog_open());
    assert_eq!(board.view().cards.len(), 3);

    assert_eq!(board.remove("a").await, Outcome::Completed);
    let ids: Vec<_> = board.view().cards.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b", "doc-3"]);

    assert_eq!(backend.lock().unwrap().removals, vec!["a".to_string()]);
}
