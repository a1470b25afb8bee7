//! Application startup.

use wasm_bindgen_futures::spawn_local;

use crate::features::{clipboard, inboxes, messages, search, stats};
use crate::services::{alerts, snippets};

/// Enhance the current page.
///
/// Installs the panic hook, warms the snippet cache, wires close buttons
/// onto server-rendered alerts, and binds each feature whose page marker
/// is present. Pages without a marker stay untouched.
pub fn run_app() {
    console_error_panic_hook::set_once();

    spawn_local(async {
        snippets::warm().await;
        alerts::adopt_server_alerts().await;
    });

    inboxes::view::bind();
    messages::view::bind();
    search::view::bind();
    stats::view::bind();
    clipboard::view::bind();
}
