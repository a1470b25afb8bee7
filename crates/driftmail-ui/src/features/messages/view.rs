//! Bindings for the message list's action bar.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement};

use crate::features::messages::actions::{BulkAction, MutationKind};
use crate::features::messages::logic::{self, PlannedMutation};
use crate::services::http;
use crate::services::snippets::{self, SnippetKey};
use crate::services::{alerts, dom, guard};

pub(crate) fn bind() {
    let Some(list) = dom::by_id("email-list") else {
        return;
    };
    let Some(form) = list.dyn_ref::<HtmlFormElement>().cloned() else {
        return;
    };
    let Some(url) = dom::data_attr(&form, "url") else {
        gloo::console::error!("message list is missing its data-url attribute");
        return;
    };

    for button in dom::query_all(&form, "button[type=submit]") {
        let name = button.get_attribute("name").unwrap_or_default();
        let value = button.get_attribute("value").unwrap_or_default();
        let form = form.clone();
        let url = url.clone();
        let handle = button.clone();
        dom::on_click(&button, move |event| {
            event.prevent_default();
            if !guard::try_acquire(&handle) {
                return;
            }
            let action = BulkAction::parse(&name, &value);
            let mut body = dom::serialize_form(&form);
            body.push(name.clone(), value.clone());

            let url = url.clone();
            let handle = handle.clone();
            spawn_local(async move {
                match http::post_form(&url, &body).await {
                    Ok((204, _)) => {
                        for mutation in logic::plan_mutations(&action, body.pairs()) {
                            apply_mutation(&mutation).await;
                        }
                    }
                    Ok(_) => alerts::append_error_alert().await,
                    Err(err) => {
                        gloo::console::error!(format!("bulk action failed: {err}"));
                        alerts::append_error_alert().await;
                    }
                }
                guard::release(&handle);
            });
        });
    }
}

async fn apply_mutation(mutation: &PlannedMutation) {
    let Some(row) = dom::by_id(&logic::row_element_id(&mutation.row_id)) else {
        return;
    };
    match mutation.kind {
        MutationKind::RemoveRow => row.remove(),
        MutationKind::AddFlag => {
            if flag_badge(&row).is_none() {
                append_flag_badge(&row).await;
            }
        }
        MutationKind::RemoveFlag => {
            if let Some(badge) = flag_badge(&row) {
                badge.remove();
            }
        }
        MutationKind::ToggleFlag => {
            if let Some(badge) = flag_badge(&row) {
                badge.remove();
            } else {
                append_flag_badge(&row).await;
            }
        }
    }
}

fn flag_badge(row: &Element) -> Option<Element> {
    dom::query(row, "div.email-flags span.label-danger")
}

async fn append_flag_badge(row: &Element) {
    if let Some(flags) = dom::query(row, "div.email-flags") {
        let badge = snippets::snippet(SnippetKey::ImportantFlag).await;
        dom::append_html(&flags, &badge);
    }
}
