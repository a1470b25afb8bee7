//! Thin web-sys helpers shared by the feature bindings.
//!
//! Everything here treats the document as the source of truth: lookups
//! return `Option` and callers stay inert when a marker is absent.

use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement};

use crate::services::http::FormBody;

/// Look an element up by id.
pub(crate) fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// First descendant of `root` matching `selector`.
pub(crate) fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All descendants of `root` matching `selector`.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// All elements in the document matching `selector`.
pub(crate) fn document_query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: web_sys::NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list.item(index).and_then(|node| node.dyn_into().ok()) {
            out.push(element);
        }
    }
    out
}

/// Read a `data-*` attribute, treating the empty string as absent.
pub(crate) fn data_attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(&format!("data-{name}"))
        .filter(|value| !value.is_empty())
}

/// Insert markup immediately after `target`.
pub(crate) fn insert_after(target: &Element, html: &str) {
    let _ = target.insert_adjacent_html("afterend", html);
}

/// Insert markup as the first child of `container`.
pub(crate) fn prepend_html(container: &Element, html: &str) {
    let _ = container.insert_adjacent_html("afterbegin", html);
}

/// Insert markup as the last child of `container`.
pub(crate) fn append_html(container: &Element, html: &str) {
    let _ = container.insert_adjacent_html("beforeend", html);
}

/// Attach a page-lifetime click handler.
pub(crate) fn on_click(target: &Element, handler: impl FnMut(&Event) + 'static) {
    EventListener::new(target, "click", handler).forget();
}

/// Attach a page-lifetime submit handler.
pub(crate) fn on_submit(form: &HtmlFormElement, handler: impl FnMut(&Event) + 'static) {
    EventListener::new(form, "submit", handler).forget();
}

/// Navigate the page to `url`.
pub(crate) fn navigate_to(url: &str) {
    let _ = window().location().set_href(url);
}

/// Reload the current page from the server.
pub(crate) fn reload_page() {
    let _ = window().location().reload();
}

/// Serialize a form the way the browser would, minus the submit buttons.
///
/// Checkboxes and radios contribute only when checked, disabled controls
/// and unnamed controls never contribute, and field order follows the
/// form's control order so the caller can append the pressed button last.
pub(crate) fn serialize_form(form: &HtmlFormElement) -> FormBody {
    let mut body = FormBody::new();
    let controls = form.elements();
    for index in 0..controls.length() {
        let Some(control) = controls.item(index) else {
            continue;
        };
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            if input.disabled() || input.name().is_empty() {
                continue;
            }
            match input.type_().as_str() {
                "checkbox" | "radio" => {
                    if input.checked() {
                        body.push(input.name(), input.value());
                    }
                }
                "submit" | "button" | "reset" | "file" | "image" => {}
                _ => body.push(input.name(), input.value()),
            }
        } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
            if !select.disabled() && !select.name().is_empty() {
                body.push(select.name(), select.value());
            }
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            if !area.disabled() && !area.name().is_empty() {
                body.push(area.name(), area.value());
            }
        }
    }
    body
}
