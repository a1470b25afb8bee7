//! Dismissable alerts.
//!
//! Server-rendered pages carry an `#alertmessages` container and may ship
//! alerts of their own. Every alert, shipped or appended here, gets a
//! close button wired to remove it; there is no other script on the page
//! to do the dismissing.

use web_sys::Element;

use crate::services::dom;
use crate::services::snippets::{self, SnippetKey};

/// Append the generic error alert to `#alertmessages`, close button
/// included. Does nothing on pages without the container.
pub(crate) async fn append_error_alert() {
    let Some(container) = dom::by_id("alertmessages") else {
        return;
    };
    let alert_html = snippets::snippet(SnippetKey::GenericError).await;
    dom::append_html(&container, &alert_html);
    if let Some(alert) = container.last_element_child() {
        attach_close_button(&alert).await;
    }
}

/// Give one alert a close button that removes it.
pub(crate) async fn attach_close_button(alert: &Element) {
    let button_html = snippets::snippet(SnippetKey::CloseAlertButton).await;
    dom::append_html(alert, &button_html);
    if let Some(button) = alert.last_element_child() {
        let alert = alert.clone();
        dom::on_click(&button, move |event| {
            event.prevent_default();
            alert.remove();
        });
    }
}

/// Wire close buttons onto every alert the server rendered into the page.
pub(crate) async fn adopt_server_alerts() {
    for alert in dom::document_query_all("div[role=alert]") {
        attach_close_button(&alert).await;
    }
}
