//! App shell components: Header, Footer
//!
//! These components frame the upload card and the table.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
