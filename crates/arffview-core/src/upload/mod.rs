//! Upload protocol: file-name validation and the load request.
//!
//! # Flow
//!
//! 1. [`validate_file_name`] rejects anything that is not `*.arff`
//! 2. [`upload_pending`] reads a [`PendingFile`] and hands it to
//!    [`upload_dataset`], which posts it through an [`UploadTransport`]
//! 3. the response is classified into a [`LoadResponse`] or an [`UploadError`]
//!
//! State changes around the request live in [`crate::state::ViewerState`].

mod transport;

pub use transport::{PendingFile, SelectedFile, TransportResponse, UploadTransport};

use crate::config::ACCEPTED_EXTENSION;
use crate::error::UploadError;
use crate::model::{ErrorBody, LoadResponse};
use tracing::debug;

/// Accept only names ending in `.arff`, in any letter case.
pub fn validate_file_name(file_name: &str) -> Result<(), UploadError> {
    if file_name.to_lowercase().ends_with(ACCEPTED_EXTENSION) {
        Ok(())
    } else {
        Err(UploadError::InvalidExtension {
            file_name: file_name.to_string(),
        })
    }
}

/// Post `file` once and decode the outcome.
///
/// Non-2xx responses become [`UploadError::Server`] carrying the body's
/// `error` and `detail` fields when present. Transport failures become
/// [`UploadError::Transport`].
pub async fn upload_dataset<T>(transport: &T, file: &SelectedFile) -> Result<LoadResponse, UploadError>
where
    T: UploadTransport + ?Sized,
{
    debug!("Uploading {} ({} bytes)", file.name, file.bytes.len());

    let response = transport.post_file(file).await?;

    if !response.is_success() {
        let body = ErrorBody::from_slice(&response.body);
        debug!(
            "Upload of {} rejected with status {}",
            file.name, response.status
        );
        return Err(UploadError::Server {
            status: response.status,
            message: body.error,
            detail: body.detail,
        });
    }

    Ok(LoadResponse::from_slice(&response.body))
}

/// Read `pending` and upload it.
///
/// A read failure becomes [`UploadError::Read`] and nothing is sent.
pub async fn upload_pending<T>(
    transport: &T,
    pending: PendingFile,
) -> Result<LoadResponse, UploadError>
where
    T: UploadTransport + ?Sized,
{
    let file_name = pending.name().to_string();
    let file = pending.read().await.map_err(|e| {
        debug!("Could not read {}: {}", file_name, e);
        UploadError::Read {
            file_name,
            message: e.0,
        }
    })?;

    upload_dataset(transport, &file).await
}
