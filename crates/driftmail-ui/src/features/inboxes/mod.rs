//! Inline inbox forms: per-row edit on the home list, edit on a single
//! inbox page, the add-inbox panel, and the pin toggle.

pub mod logic;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
