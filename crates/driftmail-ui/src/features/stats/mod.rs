//! Site statistics: the served time-series payload and the canvas line
//! charts drawn from it.

pub mod geometry;
pub mod model;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
