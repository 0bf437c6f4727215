//! End-to-end tests for the select → upload → paginate → render flow.
//!
//! The HTTP layer is replaced by a scripted transport so every scenario runs
//! offline and can assert how many requests were made.

use arffview_core::error::{FileReadError, TransportError};
use arffview_core::format::CellText;
use arffview_core::pagination::{total_pages, RowsPerPage};
use arffview_core::upload::{upload_dataset, upload_pending};
use arffview_core::{
    PendingFile, SelectedFile, TransportResponse, UploadError, UploadOutcome, UploadTransport,
    ViewerState,
};
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Transport that replays queued responses in order and counts requests.
#[derive(Default)]
struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    fn then_respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(TransportResponse::new(status, body.to_string())));
        self
    }

    fn then_fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
        self
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl UploadTransport for ScriptedTransport {
    async fn post_file(&self, file: &SelectedFile) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(file.name.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

fn iris_response() -> serde_json::Value {
    json!({
        "attributes": [{"name": "sepal_length", "type": "numeric"}],
        "rows": [{"sepal_length": 5.1}, {"sepal_length": 4.9}]
    })
}

fn numbered_response(n: usize) -> serde_json::Value {
    let rows: Vec<_> = (0..n).map(|i| json!({"id": i, "label": format!("row {i}")})).collect();
    json!({
        "attributes": [{"name": "id", "type": "INTEGER"}, {"name": "label", "type": "STRING"}],
        "rows_count": n,
        "rows": rows
    })
}

/// Contents of a selection that must never be read.
fn unread_contents() -> Result<Vec<u8>, FileReadError> {
    panic!("rejected selections must not be read")
}

fn arff(name: &str) -> SelectedFile {
    SelectedFile::new(name, b"@relation test\n@attribute x numeric\n@data\n1\n".to_vec())
}

// ============================================================================
// Upload scenarios
// ============================================================================

#[tokio::test]
async fn test_wrong_extension_makes_no_request() {
    let transport = ScriptedTransport::default().then_respond(200, iris_response());
    let mut state = ViewerState::new();

    let outcome = state.handle_file(&transport, Some(arff("data.txt"))).await;

    assert_eq!(outcome, None);
    assert_eq!(transport.request_count(), 0);
    assert!(matches!(
        state.error(),
        Some(UploadError::InvalidExtension { .. })
    ));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_iris_upload_populates_state() {
    let transport = ScriptedTransport::default().then_respond(200, iris_response());
    let mut state = ViewerState::new();

    let outcome = state.handle_file(&transport, Some(arff("iris.arff"))).await;

    assert_eq!(
        outcome,
        Some(UploadOutcome::Loaded {
            attributes: 1,
            rows: 2
        })
    );
    assert_eq!(state.attributes().len(), 1);
    assert_eq!(state.dataset().row_count(), 2);
    assert_eq!(state.pagination().page(), 1);
    assert!(state.stats_visible());
    assert!(!state.is_loading());
    assert_eq!(state.file_name(), Some("iris.arff"));

    let first = CellText::of(&state.visible_rows()[0], "sepal_length");
    assert_eq!(first.text, "5.1");
    assert_eq!(
        state.attributes()[0].type_label().as_deref(),
        Some("numeric")
    );
}

#[tokio::test]
async fn test_failed_upload_keeps_previous_dataset() {
    let transport = ScriptedTransport::default()
        .then_respond(200, iris_response())
        .then_respond(500, json!({"error": "bad file"}));
    let mut state = ViewerState::new();

    state.handle_file(&transport, Some(arff("iris.arff"))).await;
    let before = state.dataset().clone();

    let outcome = state.handle_file(&transport, Some(arff("broken.arff"))).await;

    assert_eq!(outcome, Some(UploadOutcome::Failed));
    assert_eq!(state.dataset(), &before);
    assert_eq!(
        state.error().map(UploadError::user_message).as_deref(),
        Some("bad file")
    );
    assert!(!state.is_loading());
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_transport_error_message_is_surfaced() {
    let transport = ScriptedTransport::default().then_fail("error sending request for url");
    let mut state = ViewerState::new();

    state.handle_file(&transport, Some(arff("iris.arff"))).await;

    assert_eq!(
        state.error().map(UploadError::user_message).as_deref(),
        Some("error sending request for url")
    );
    assert!(state.dataset().is_empty());
}

#[tokio::test]
async fn test_recovery_after_error() {
    let transport = ScriptedTransport::default()
        .then_respond(400, json!({"error": "No se pudo parsear el archivo ARFF"}))
        .then_respond(200, iris_response());
    let mut state = ViewerState::new();

    state.handle_file(&transport, Some(arff("a.arff"))).await;
    assert!(state.error().is_some());

    state.handle_file(&transport, Some(arff("b.arff"))).await;
    assert!(state.error().is_none());
    assert_eq!(state.dataset().row_count(), 2);
}

#[tokio::test]
async fn test_overlapping_uploads_latest_selection_wins() {
    let transport = ScriptedTransport::default()
        .then_respond(200, numbered_response(5))
        .then_respond(200, numbered_response(80));
    let mut state = ViewerState::new();

    // Two selections before either response comes back.
    let slow = state.begin_upload("slow.arff").unwrap();
    let fast = state.begin_upload("fast.arff").unwrap();

    let slow_result = upload_dataset(&transport, &arff("slow.arff")).await;
    let fast_result = upload_dataset(&transport, &arff("fast.arff")).await;

    assert!(matches!(
        state.complete_upload(fast, fast_result),
        UploadOutcome::Loaded { rows: 80, .. }
    ));
    assert_eq!(state.complete_upload(slow, slow_result), UploadOutcome::Stale);
    assert_eq!(state.dataset().row_count(), 80);
}

#[tokio::test]
async fn test_ticket_order_follows_selection_not_read_completion() {
    let transport = ScriptedTransport::default()
        .then_respond(200, numbered_response(3))
        .then_respond(200, numbered_response(500));
    let mut state = ViewerState::new();

    let big = PendingFile::new("big.arff", async {
        Ok::<_, FileReadError>(vec![b'1'; 64 * 1024])
    });
    let small = PendingFile::new("small.arff", async {
        Ok::<_, FileReadError>(b"@data\n1\n".to_vec())
    });

    // Both selections are ticketed before either file is read.
    let big_ticket = state.begin_upload(big.name()).unwrap();
    let small_ticket = state.begin_upload(small.name()).unwrap();
    assert!(big_ticket.id() < small_ticket.id());
    assert!(state.is_loading());

    // The small file finishes reading and uploading first.
    let small_result = upload_pending(&transport, small).await;
    assert_eq!(
        state.complete_upload(small_ticket, small_result),
        UploadOutcome::Loaded {
            attributes: 2,
            rows: 3
        }
    );

    let big_result = upload_pending(&transport, big).await;
    assert_eq!(
        state.complete_upload(big_ticket, big_result),
        UploadOutcome::Stale
    );
    assert_eq!(state.dataset().row_count(), 3);
    assert_eq!(state.file_name(), Some("small.arff"));
}

#[test]
fn test_wrong_extension_is_rejected_before_reading() {
    let mut state = ViewerState::new();
    let pending = PendingFile::new("data.txt", async { unread_contents() });

    let result = state.begin_upload(pending.name());

    assert!(matches!(result, Err(UploadError::InvalidExtension { .. })));
    assert!(state.error().is_some());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_unreadable_file_clears_loading() {
    let transport = ScriptedTransport::default().then_respond(200, iris_response());
    let mut state = ViewerState::new();
    let pending = PendingFile::new("gone.arff", async {
        Err::<Vec<u8>, _>(FileReadError::new("NotFoundError"))
    });

    let ticket = state.begin_upload(pending.name()).unwrap();
    let outcome = state.complete_upload(ticket, upload_pending(&transport, pending).await);

    assert_eq!(outcome, UploadOutcome::Failed);
    assert!(!state.is_loading());
    assert_eq!(transport.request_count(), 0);
    assert_eq!(
        state.error().map(UploadError::user_message).as_deref(),
        Some("Failed to read gone.arff: NotFoundError")
    );
}

// ============================================================================
// Pagination over a loaded dataset
// ============================================================================

#[tokio::test]
async fn test_pages_partition_loaded_rows() {
    let n = 237;
    let transport = ScriptedTransport::default().then_respond(200, numbered_response(n));
    let mut state = ViewerState::new();
    state.handle_file(&transport, Some(arff("big.arff"))).await;

    for rpp in RowsPerPage::ALL {
        state.set_rows_per_page(rpp);
        assert_eq!(state.pagination().page(), 1);
        assert_eq!(state.total_pages(), total_pages(n, rpp));

        let mut ids = Vec::new();
        loop {
            ids.extend(
                state
                    .visible_rows()
                    .iter()
                    .map(|row| CellText::of(row, "id").text),
            );
            if !state.pagination().has_next(n) {
                break;
            }
            state.next_page();
        }

        let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected, "rows_per_page={rpp}");
    }
}

#[tokio::test]
async fn test_boundary_navigation_is_noop() {
    let transport = ScriptedTransport::default().then_respond(200, numbered_response(30));
    let mut state = ViewerState::new();
    state.handle_file(&transport, Some(arff("small.arff"))).await;
    state.set_rows_per_page(RowsPerPage::Ten);

    state.previous_page();
    assert_eq!(state.pagination().page(), 1);

    state.last_page();
    assert_eq!(state.pagination().page(), 3);
    state.next_page();
    assert_eq!(state.pagination().page(), 3);
}

#[tokio::test]
async fn test_new_upload_returns_to_first_page() {
    let transport = ScriptedTransport::default()
        .then_respond(200, numbered_response(300))
        .then_respond(200, numbered_response(300));
    let mut state = ViewerState::new();

    state.handle_file(&transport, Some(arff("a.arff"))).await;
    state.last_page();
    assert_eq!(state.pagination().page(), 6);

    state.handle_file(&transport, Some(arff("b.arff"))).await;
    assert_eq!(state.pagination().page(), 1);
}

// ============================================================================
// Cell rendering
// ============================================================================

#[tokio::test]
async fn test_cell_rendering_rules() {
    let long = "x".repeat(45);
    let transport = ScriptedTransport::default().then_respond(
        200,
        json!({
            "attributes": [
                {"name": "missing"},
                {"name": "nested"},
                {"name": "long"},
                {"name": "absent"}
            ],
            "rows": [{"missing": null, "nested": {"a": 1}, "long": long}]
        }),
    );
    let mut state = ViewerState::new();
    state.handle_file(&transport, Some(arff("cells.arff"))).await;

    let row = &state.visible_rows()[0];
    assert_eq!(CellText::of(row, "missing").text, "-");
    assert_eq!(CellText::of(row, "nested").text, r#"{"a":1}"#);
    assert_eq!(CellText::of(row, "absent").text, "-");

    let long_cell = CellText::of(row, "long");
    assert!(long_cell.truncated);
    assert_eq!(long_cell.text, long);
}
