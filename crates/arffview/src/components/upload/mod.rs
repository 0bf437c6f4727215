//! File selection and upload feedback: UploadCard, ErrorBanner

mod error_banner;
mod upload_card;

pub use error_banner::ErrorBanner;
pub use upload_card::UploadCard;
