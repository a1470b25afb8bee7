//! Search: form navigation and the result-poll loop.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
