//! Test doubles shared by the unit tests.
//!
//! Only compiled when running tests.

use crate::error::TransportError;
use crate::model::{Attribute, LoadResponse, Row};
use crate::theme::{ColorSchemeSource, Subscription};
use crate::upload::{SelectedFile, TransportResponse, UploadTransport};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Transport returning a canned result and recording every call.
pub struct FakeTransport {
    result: Result<TransportResponse, TransportError>,
    calls: Cell<usize>,
    last_file: RefCell<Option<SelectedFile>>,
}

impl FakeTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self::with_result(Ok(TransportResponse::new(status, body.as_bytes().to_vec())))
    }

    pub fn fail(message: &str) -> Self {
        Self::with_result(Err(TransportError::new(message)))
    }

    fn with_result(result: Result<TransportResponse, TransportError>) -> Self {
        Self {
            result,
            calls: Cell::new(0),
            last_file: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_file_name(&self) -> Option<String> {
        self.last_file.borrow().as_ref().map(|f| f.name.clone())
    }
}

#[async_trait::async_trait(?Send)]
impl UploadTransport for FakeTransport {
    async fn post_file(&self, file: &SelectedFile) -> Result<TransportResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_file.borrow_mut() = Some(file.clone());
        self.result.clone()
    }
}

/// Response with one numeric attribute `x` and `rows` rows.
pub fn rows_response(rows: usize) -> LoadResponse {
    LoadResponse {
        attributes: vec![Attribute::new("x", Some("NUMERIC"))],
        rows: (0..rows)
            .map(|i| {
                let mut row = Row::new();
                row.insert("x".to_string(), json!(i));
                row
            })
            .collect(),
        rows_count: Some(rows),
    }
}

type Listener = Box<dyn FnMut(bool)>;

/// Color-scheme source whose preference is flipped by the test.
pub struct FakeColorScheme {
    dark: Cell<bool>,
    listeners: Rc<RefCell<Vec<(usize, Listener)>>>,
    next_id: Cell<usize>,
}

impl FakeColorScheme {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Cell::new(dark),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn emit(&self, dark: bool) {
        self.dark.set(dark);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(dark);
        }
    }
}

impl ColorSchemeSource for FakeColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_change));

        let listeners = Rc::clone(&self.listeners);
        Subscription::new(move || listeners.borrow_mut().retain(|(other, _)| *other != id))
    }
}
