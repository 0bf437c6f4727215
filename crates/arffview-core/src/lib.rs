//! # arffview core
//!
//! Platform-independent logic behind the ARFF viewer: the dataset model, the
//! upload protocol, client-side pagination, cell formatting and system theme
//! tracking. Parsing and validation of ARFF content happen on the server; this
//! crate only decides what to send and how to show what comes back.
//!
//! ## Modules
//!
//! - [`state`] - [`ViewerState`] and its transitions (upload, pagination)
//! - [`upload`] - file-name validation and the load request behind [`UploadTransport`]
//! - [`model`] - attributes, rows, datasets and lenient response decoding
//! - [`pagination`] - page sizes, page windows, boundary-clamped navigation
//! - [`format`] - cell display text and truncation
//! - [`theme`] - color-scheme sources and the RAII [`ThemeTracker`]
//! - [`config`] - endpoint and rendering constants
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```ignore
//! use arffview_core::{SelectedFile, ViewerState};
//!
//! let mut state = ViewerState::new();
//! let file = SelectedFile::new("iris.arff", bytes);
//! state.handle_file(&transport, Some(file)).await;
//!
//! for row in state.visible_rows() {
//!     // render
//! }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod pagination;
pub mod state;
pub mod theme;
pub mod upload;

#[cfg(test)]
mod test_utils;

pub use error::{FileReadError, TransportError, UploadError};
pub use model::{Attribute, Dataset, LoadResponse, Row};
pub use pagination::{Pagination, RowsPerPage};
pub use state::{PageKey, UploadOutcome, UploadTicket, ViewerState};
pub use theme::{ColorScheme, ColorSchemeSource, Subscription, ThemeTracker};
pub use upload::{PendingFile, SelectedFile, TransportResponse, UploadTransport};
