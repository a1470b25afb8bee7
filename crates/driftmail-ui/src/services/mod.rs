//! Shared browser services: HTTP plumbing, snippet lookup, DOM helpers,
//! the busy-button guard, and alert rendering.
//!
//! The HTTP and snippet modules keep their decision logic DOM-free so it
//! compiles and tests on the native target; everything that touches the
//! document is wasm-only.

pub mod http;
pub mod snippets;

#[cfg(target_arch = "wasm32")]
pub(crate) mod alerts;
#[cfg(target_arch = "wasm32")]
pub(crate) mod dom;
#[cfg(target_arch = "wasm32")]
pub(crate) mod guard;
