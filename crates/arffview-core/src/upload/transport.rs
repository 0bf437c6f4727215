//! Transport abstraction for the upload request.
//!
//! The core crate only knows the shape of the exchange; the HTTP client lives
//! in the app crate (reqwest, which maps to `fetch()` on WASM). Tests plug in
//! an in-memory fake.

use crate::error::{FileReadError, TransportError};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// A file chosen by the user, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

type ReadFuture = Pin<Box<dyn Future<Output = Result<Vec<u8>, FileReadError>>>>;

/// A file chosen by the user whose contents have not been read yet.
///
/// The name is available as soon as the user picks the file, so validation
/// and ticketing happen at selection time; the bytes are read once the upload
/// task runs.
pub struct PendingFile {
    name: String,
    read: ReadFuture,
}

impl PendingFile {
    pub fn new<F>(name: impl Into<String>, read: F) -> Self
    where
        F: Future<Output = Result<Vec<u8>, FileReadError>> + 'static,
    {
        Self {
            name: name.into(),
            read: Box::pin(read),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Await the contents.
    pub async fn read(self) -> Result<SelectedFile, FileReadError> {
        let bytes = self.read.await?;
        Ok(SelectedFile {
            name: self.name,
            bytes,
        })
    }
}

impl fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Raw response of the load endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one file to the load endpoint as a multipart form.
///
/// Implementations must make exactly one attempt and must not interpret the
/// status code: non-2xx responses are returned as `Ok`. `Err` is reserved for
/// requests that never produced a response.
#[async_trait::async_trait(?Send)]
pub trait UploadTransport {
    async fn post_file(&self, file: &SelectedFile) -> Result<TransportResponse, TransportError>;
}
