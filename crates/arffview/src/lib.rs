//! # arffview
//!
//! Dioxus front-end for the ARFF viewer. Runs in the browser (WASM) or as a
//! desktop webview; all state transitions live in [`arffview_core`].
//!
//! - [`components`] - composition root and UI components
//! - [`api`] - reqwest transport for the load endpoint
//! - [`theme`] - system color-scheme hook

#![forbid(unsafe_code)]

pub mod api;
pub mod components;
pub mod theme;
