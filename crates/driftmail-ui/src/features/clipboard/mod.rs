//! Copy-to-clipboard buttons next to listed inbox addresses.

pub mod config;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
