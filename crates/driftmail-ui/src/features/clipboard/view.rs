//! Bindings for the copy buttons.

use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument};

use crate::features::clipboard::config::{self, CopyConfig};
use crate::services::dom;

pub(crate) fn bind() {
    if !copy_supported() {
        return;
    }
    for host in dom::document_query_all("[data-copy-inbox]") {
        let config = match CopyConfig::from_attrs(|name| dom::data_attr(&host, name)) {
            Ok(config) => config,
            Err(err) => {
                gloo::console::error!(format!("copy buttons skipped: {err}"));
                continue;
            }
        };
        let rows = config.children.as_ref().map_or_else(
            || vec![host.clone()],
            |selector| dom::query_all(&host, &format!(":scope > {selector}")),
        );
        for row in rows {
            install_button(&row, &config);
        }
    }
}

fn copy_supported() -> bool {
    document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|html| html.query_command_supported("copy").ok())
        .unwrap_or(false)
}

fn install_button(row: &Element, config: &CopyConfig) {
    // Rows without an address element are header rows.
    let Some(name_element) = dom::query(row, &config.inbox_name) else {
        return;
    };
    if !config::is_copyable_address(&name_element.text_content().unwrap_or_default()) {
        return;
    }
    let Some(container) = dom::query(row, &config.button_container) else {
        return;
    };
    dom::prepend_html(&container, &config.button_markup());
    let Some(button) = container.first_element_child() else {
        return;
    };
    dom::on_click(&button, move |event| {
        event.prevent_default();
        copy_contents(&name_element);
    });
}

/// Select the element's text, copy it, and drop the selection again.
fn copy_contents(element: &Element) {
    let Ok(Some(selection)) = window().get_selection() else {
        return;
    };
    let Ok(range) = document().create_range() else {
        return;
    };
    if range.select_node_contents(element).is_err() {
        return;
    }
    let _ = selection.remove_all_ranges();
    let _ = selection.add_range(&range);
    if let Ok(html) = document().dyn_into::<HtmlDocument>() {
        let _ = html.exec_command("copy");
    }
    let _ = selection.remove_all_ranges();
}
