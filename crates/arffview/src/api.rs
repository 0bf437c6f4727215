//! HTTP transport for the load endpoint.
//!
//! Wraps reqwest, which works on both targets:
//! - Native: hyper with rustls-tls
//! - WASM: the browser `fetch()` API, with credentials mode `include` so the
//!   service's cookies travel with the upload
//!
//! Each call makes exactly one request. Status codes are not interpreted here;
//! [`arffview_core::upload::upload_dataset`] classifies the response.

use arffview_core::config::{ApiConfig, ACCEPT_JSON, UPLOAD_FIELD_NAME};
use arffview_core::error::{ConfigError, TransportError};
use arffview_core::{SelectedFile, TransportResponse, UploadTransport};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use url::Url;

/// Posts files to `POST {base}/api/load` as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct HttpUploadTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpUploadTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.load_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl UploadTransport for HttpUploadTransport {
    async fn post_file(&self, file: &SelectedFile) -> Result<TransportResponse, TransportError> {
        // Boundary and Content-Type are filled in by reqwest
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, ACCEPT_JSON)
            .multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {}", e)))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
