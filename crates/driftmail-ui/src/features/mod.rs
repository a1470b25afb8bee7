//! Feature slices, one per page surface the crate enhances.
//!
//! Each slice keeps its decision logic in a DOM-free module tested on the
//! native target and its bindings in a wasm-only `view` module.

pub mod clipboard;
pub mod inboxes;
pub mod messages;
pub mod search;
pub mod stats;
