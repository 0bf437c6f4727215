//! Production configuration constants.
//!
//! Values shared by the upload protocol, the picker and the table renderer.
//! The viewer has no runtime configuration: everything here is fixed at
//! compile time, and [`ApiConfig`] only exists so the endpoint can be pointed
//! elsewhere from tests.
//!
//! # Usage
//!
//! ```
//! use arffview_core::config::{ApiConfig, LOAD_PATH};
//!
//! let url = ApiConfig::default().load_url().unwrap();
//! assert!(url.as_str().ends_with(LOAD_PATH));
//! ```

use crate::error::ConfigError;
use url::Url;

// =============================================================================
// Remote API
// =============================================================================

/// Base URL of the ARFF parsing service.
pub const DEFAULT_API_BASE_URL: &str = "https://api-simulacion.onrender.com";

/// Path of the upload endpoint, relative to the base URL.
pub const LOAD_PATH: &str = "/api/load";

/// Multipart field name carrying the file bytes.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Value of the `Accept` header sent with uploads.
pub const ACCEPT_JSON: &str = "application/json";

// =============================================================================
// File selection
// =============================================================================

/// The only extension the client accepts (compared case-insensitively).
pub const ACCEPTED_EXTENSION: &str = ".arff";

/// `accept` attribute advertised by the file input. Advisory only: the
/// extension check is the enforced rule.
pub const PICKER_ACCEPT: &str = ".arff,text/*";

// =============================================================================
// Table rendering
// =============================================================================

/// String cells longer than this many characters are visually truncated.
pub const TRUNCATE_AFTER_CHARS: usize = 30;

/// Placeholder shown for null or missing cells.
pub const MISSING_CELL: &str = "-";

/// Endpoint configuration for the upload client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the load endpoint.
    ///
    /// Only `http` and `https` base URLs are accepted. A trailing slash on the
    /// base is tolerated.
    pub fn load_url(&self) -> Result<Url, ConfigError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                base.scheme()
            )));
        }

        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), LOAD_PATH);
        Url::parse(&joined).map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", joined, e)))
    }
}
