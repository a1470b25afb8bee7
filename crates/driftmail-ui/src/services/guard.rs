//! Re-entry guard for controls that trigger requests.
//!
//! A guarded control gets a `data-clicked` token, the `disabled`
//! attribute and class, and a spinner on its icon. Buttons are released
//! when their request settles; forms are guarded as a whole and usually
//! vanish before a release would matter, so only a rerender resets them.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement};

use crate::services::dom;

const CLICKED: &str = "clicked";

fn is_clicked(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.dataset().get(CLICKED))
        .is_some_and(|value| value == "yes")
}

fn set_clicked(element: &Element, clicked: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.dataset().set(CLICKED, if clicked { "yes" } else { "no" });
    }
}

fn spin(control: &Element, on: bool) {
    let classes = control.class_list();
    if on {
        let _ = control.set_attribute("disabled", "disabled");
        let _ = classes.add_1("disabled");
    } else {
        let _ = control.remove_attribute("disabled");
        let _ = classes.remove_1("disabled");
    }
    for icon in dom::query_all(control, "span.fa") {
        let icon_classes = icon.class_list();
        if on {
            let _ = icon_classes.add_2("fa-spinner", "fa-spin");
        } else {
            let _ = icon_classes.remove_2("fa-spinner", "fa-spin");
        }
    }
}

/// Claim a control for one in-flight request. Returns `false` when a
/// previous click still holds it.
pub(crate) fn try_acquire(control: &Element) -> bool {
    if is_clicked(control) {
        return false;
    }
    set_clicked(control, true);
    spin(control, true);
    true
}

/// Release a control claimed by [`try_acquire`].
pub(crate) fn release(control: &Element) {
    set_clicked(control, false);
    spin(control, false);
}

/// True when the form is already mid-submission.
pub(crate) fn form_is_locked(form: &HtmlFormElement) -> bool {
    is_clicked(form)
}

/// Lock a whole form: token on the form, spinners on its buttons, the
/// disabled class on its button-styled links.
pub(crate) fn lock_form(form: &HtmlFormElement) {
    set_clicked(form, true);
    for button in dom::query_all(form, "button") {
        spin(&button, true);
    }
    for anchor in dom::query_all(form, "a.btn") {
        let _ = anchor.class_list().add_1("disabled");
    }
}

/// Clear a form's lock after its markup was replaced in place.
pub(crate) fn reset_form(form: &HtmlFormElement) {
    set_clicked(form, false);
}
