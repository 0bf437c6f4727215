//! UI components for the ARFF viewer.
//!
//! - `app_shell`: Header, Footer
//! - `upload`: UploadCard, ErrorBanner
//! - `table`: StatsStrip, DataTable, PaginationBar
//!
//! # Context Providers
//!
//! [`App`] places the HTTP transport in context as a [`TransportContext`].
//! An [`ApiConfig`] placed in context above [`App`] overrides the default
//! endpoint.

mod app_shell;
mod table;
mod upload;

pub use app_shell::{Footer, Header};
pub use table::{DataTable, PaginationBar, StatsStrip};
pub use upload::{ErrorBanner, UploadCard};

use crate::api::HttpUploadTransport;
use crate::theme::use_color_scheme;
use arffview_core::config::ApiConfig;
use arffview_core::error::{TransportError, UploadError};
use arffview_core::upload::upload_pending;
use arffview_core::{PendingFile, RowsPerPage, UploadOutcome, ViewerState};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use instant::Instant;

/// Transport shared through context. `None` when the configured endpoint is
/// unusable; uploads then fail with the configuration error.
pub type TransportContext = Option<HttpUploadTransport>;

#[component]
pub fn App() -> Element {
    let config = try_use_context::<ApiConfig>().unwrap_or_default();
    let transport = use_context_provider(move || -> TransportContext {
        match HttpUploadTransport::new(&config) {
            Ok(transport) => {
                info!("Upload endpoint: {}", transport.endpoint());
                Some(transport)
            }
            Err(e) => {
                error!("Invalid API configuration: {}", e);
                None
            }
        }
    });

    let mut viewer = use_signal(ViewerState::new);
    let scheme = use_color_scheme();

    // Validation and the ticket happen here, at selection time; the file is
    // read inside the upload task.
    let handle_file = move |pending: PendingFile| {
        let ticket = match viewer.write().begin_upload(pending.name()) {
            Ok(ticket) => ticket,
            Err(_) => return,
        };

        let transport = transport.clone();
        spawn(async move {
            let file_name = pending.name().to_string();
            info!("Uploading {} as upload #{}", file_name, ticket.id());
            let started = Instant::now();

            let result = match transport.as_ref() {
                Some(transport) => upload_pending(transport, pending).await,
                None => Err(UploadError::from(TransportError::new(
                    "Upload endpoint is not configured",
                ))),
            };

            let outcome = viewer.write().complete_upload(ticket, result);
            match outcome {
                UploadOutcome::Loaded { attributes, rows } => info!(
                    "Loaded {} in {:.0}ms: {} attributes, {} rows",
                    file_name,
                    started.elapsed().as_secs_f64() * 1000.0,
                    attributes,
                    rows
                ),
                UploadOutcome::Failed => error!("Upload of {} failed", file_name),
                UploadOutcome::Stale => info!(
                    "Upload #{} ({}) superseded by a newer selection",
                    ticket.id(),
                    file_name
                ),
            }
        });
    };

    // Re-slice only when the dataset, page or page size changes
    let page_key = use_memo(move || viewer.read().page_key());
    let visible_rows = use_memo(move || {
        page_key();
        viewer.peek().visible_rows().to_vec()
    });

    let theme_class = format!("av-app av-app--{}", scheme().css_modifier());
    let state = viewer.read();
    let pagination = state.pagination();
    let total_pages = state.total_pages();
    let error_view = state.error().map(|err| {
        rsx! {
            ErrorBanner {
                message: err.user_message(),
                detail: err.detail().map(str::to_string),
            }
        }
    });

    rsx! {
        div { class: theme_class,
            main { class: "av-main",
                div { class: "av-panel",
                    Header {}

                    UploadCard {
                        loading: state.is_loading(),
                        on_file_selected: handle_file,
                    }

                    {error_view}

                    if state.stats_visible() {
                        StatsStrip {
                            file_name: state.file_name().map(str::to_string),
                            attribute_count: state.attributes().len(),
                            row_count: state.dataset().row_count(),
                            reported_rows: state.dataset().reported_row_mismatch(),
                        }
                    }

                    if !visible_rows.read().is_empty() {
                        DataTable {
                            attributes: state.attributes().to_vec(),
                            rows: visible_rows,
                        }
                    }

                    if total_pages > 1 {
                        PaginationBar {
                            page: pagination.page(),
                            total_pages,
                            rows_per_page: pagination.rows_per_page(),
                            on_first: move |_| viewer.write().first_page(),
                            on_previous: move |_| viewer.write().previous_page(),
                            on_next: move |_| viewer.write().next_page(),
                            on_last: move |_| viewer.write().last_page(),
                            on_rows_per_page: move |rpp: RowsPerPage| viewer.write().set_rows_per_page(rpp),
                        }
                    }
                }
            }

            Footer {}
        }
    }
}
