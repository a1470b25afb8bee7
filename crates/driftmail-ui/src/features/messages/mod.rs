//! Bulk actions on the message list: flag, unflag, delete, and the
//! per-row important toggle.

pub mod actions;
pub mod logic;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
