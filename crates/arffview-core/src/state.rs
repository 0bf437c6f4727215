//! Viewer state and its transitions.
//!
//! [`ViewerState`] is the single owner of everything the view mutates: the
//! dataset, pagination, the loading flag and the error banner. Every change is
//! a method call, so the UI layer only forwards events and re-renders.
//!
//! # Overlapping uploads
//!
//! Each accepted selection takes a fresh [`UploadTicket`]. Only the response
//! carrying the latest ticket is applied; anything older is dropped. The
//! picker therefore stays usable while a request is in flight, and the most
//! recent selection always wins regardless of response order.

use crate::error::UploadError;
use crate::model::{Attribute, Dataset, LoadResponse, Row};
use crate::pagination::{Pagination, RowsPerPage};
use crate::upload::{upload_dataset, validate_file_name, SelectedFile, UploadTransport};
use tracing::{debug, info};

/// Sequence number of an upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What [`ViewerState::complete_upload`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Dataset replaced
    Loaded { attributes: usize, rows: usize },
    /// Error banner set, dataset untouched
    Failed,
    /// A newer upload superseded this one; nothing changed
    Stale,
}

/// Inputs of the visible page. Equal keys always produce the same slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub dataset_generation: u64,
    pub page: usize,
    pub rows_per_page: RowsPerPage,
}

/// All state owned by the viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    dataset: Dataset,
    dataset_generation: u64,
    pagination: Pagination,
    loading: bool,
    error: Option<UploadError>,
    file_name: Option<String>,
    stats_visible: bool,
    latest_ticket: u64,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.dataset.attributes
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn stats_visible(&self) -> bool {
        self.stats_visible
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.dataset.row_count())
    }

    pub fn page_key(&self) -> PageKey {
        PageKey {
            dataset_generation: self.dataset_generation,
            page: self.pagination.page(),
            rows_per_page: self.pagination.rows_per_page(),
        }
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[Row] {
        let window = self.pagination.window(self.dataset.row_count());
        &self.dataset.rows[window]
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.dataset.row_count());
    }

    pub fn last_page(&mut self) {
        self.pagination.last(self.dataset.row_count());
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    // ------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------

    /// Start an upload for `file_name`.
    ///
    /// Clears the previous error. A name without the `.arff` extension sets
    /// the validation error and returns it; no ticket is issued, so the
    /// caller must not send anything. Otherwise records the name, raises the
    /// loading flag and returns the ticket to hand back to
    /// [`complete_upload`](Self::complete_upload).
    pub fn begin_upload(&mut self, file_name: &str) -> Result<UploadTicket, UploadError> {
        self.error = None;

        if let Err(err) = validate_file_name(file_name) {
            debug!("Rejected selection {}: {}", file_name, err);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.file_name = Some(file_name.to_string());
        self.latest_ticket += 1;
        self.loading = true;

        Ok(UploadTicket(self.latest_ticket))
    }

    /// Apply the result of the upload identified by `ticket`.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<LoadResponse, UploadError>,
    ) -> UploadOutcome {
        if ticket.0 != self.latest_ticket {
            debug!(
                "Discarding response for upload #{} (latest is #{})",
                ticket.0, self.latest_ticket
            );
            return UploadOutcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(response) => {
                self.dataset = Dataset::from(response);
                self.dataset_generation += 1;
                self.pagination.reset();
                self.stats_visible = true;

                let outcome = UploadOutcome::Loaded {
                    attributes: self.dataset.attributes.len(),
                    rows: self.dataset.row_count(),
                };
                info!(
                    "Loaded {} attributes and {} rows",
                    self.dataset.attributes.len(),
                    self.dataset.row_count()
                );
                outcome
            }
            Err(err) => {
                debug!("Upload #{} failed: {}", ticket.0, err);
                self.error = Some(err);
                UploadOutcome::Failed
            }
        }
    }

    /// Validate, upload and apply one selected file.
    ///
    /// Returns `None` when there was nothing to do: no file, or a file
    /// rejected by the extension check (in which case the error banner is
    /// set and the transport is never called).
    pub async fn handle_file<T>(
        &mut self,
        transport: &T,
        file: Option<SelectedFile>,
    ) -> Option<UploadOutcome>
    where
        T: UploadTransport + ?Sized,
    {
        let file = file?;
        let ticket = self.begin_upload(&file.name).ok()?;
        let result = upload_dataset(transport, &file).await;
        Some(self.complete_upload(ticket, result))
    }
}
