#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Driftmail browser layer.
//!
//! The server renders complete pages; this crate progressively enhances
//! them. Each feature binds to a page marker (a list, a form, a chart
//! container) when it is present and stays inert otherwise. Server
//! responses are interpreted by status code only, and HTML fragments are
//! inserted verbatim, so no virtual DOM sits between this crate and the
//! document.
//!
//! Decision logic (status classification, action dispatch, form encoding,
//! chart geometry) is DOM-free and tested on the native target; only the
//! thin binding layer compiles for wasm32.

pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
