//! Bindings for the inline inbox forms.
//!
//! Submit handling is attached to the form element itself and cancel
//! handling is delegated to the wrapping row, so a validation rerender
//! (which replaces the form's children verbatim) needs no rebinding.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::features::inboxes::logic::{self, EditedFields, FlagChange};
use crate::services::http::{self, ExchangeOutcome};
use crate::services::snippets::{self, SnippetKey};
use crate::services::{alerts, dom, guard};

pub(crate) fn bind() {
    bind_pin_buttons();
    bind_home_rows();
    bind_single_inbox();
    bind_add_inbox();
}

/// What to do once the server answers 204 for an inline form.
#[derive(Clone)]
enum ExchangeKind {
    /// Home list: repaint the inbox row, then drop the form row.
    HomeRow { row: Element },
    /// Single-inbox page: just drop the form row.
    SingleInbox,
    /// Add-inbox panel: the new row only exists server-side.
    AddInbox,
}

/// Extra cleanup when a cancel link dismisses the form row.
#[derive(Clone)]
enum CancelCleanup {
    None,
    /// Re-show the add-inbox trigger the panel replaced.
    ShowTrigger(HtmlElement),
}

fn bind_home_rows() {
    let Some(list) = dom::by_id("inbox-list") else {
        return;
    };
    for button in dom::query_all(&list, ".inbox-options .inbox-options-btn") {
        let Some(row) = button.closest("div.row[id]").ok().flatten() else {
            continue;
        };
        let handle = button.clone();
        dom::on_click(&button, move |event| {
            event.prevent_default();
            // A second click while the form is open closes it.
            if let Some(open) = edit_row_after(&row) {
                open.remove();
                return;
            }
            if !guard::try_acquire(&handle) {
                return;
            }
            let row = row.clone();
            let handle = handle.clone();
            spawn_local(async move {
                match http::get_fragment(&logic::edit_form_url(&row.id())).await {
                    Ok(fragment) => {
                        if edit_row_after(&row).is_none() {
                            dom::insert_after(&row, &logic::wrap_edit_fragment(&fragment));
                            if let Some(form_row) = row.next_element_sibling() {
                                install_exchange(
                                    &form_row,
                                    ExchangeKind::HomeRow { row: row.clone() },
                                    CancelCleanup::None,
                                );
                            }
                        }
                    }
                    Err(err) => {
                        gloo::console::error!(format!("edit form failed to load: {err}"));
                        alerts::append_error_alert().await;
                    }
                }
                guard::release(&handle);
            });
        });
    }
}

fn edit_row_after(row: &Element) -> Option<Element> {
    row.next_element_sibling()
        .filter(|next| next.class_list().contains("inbox-edit-form-row"))
}

fn bind_single_inbox() {
    let Some(list) = dom::by_id("email-list") else {
        return;
    };
    for button in dom::query_all(&list, ".inbox-edit") {
        let Some(inbox_id) = dom::data_attr(&button, "inbox-id") else {
            continue;
        };
        let list = list.clone();
        let handle = button.clone();
        dom::on_click(&button, move |event| {
            event.prevent_default();
            if let Some(open) = open_edit_row(&list) {
                open.remove();
                return;
            }
            if !guard::try_acquire(&handle) {
                return;
            }
            let list = list.clone();
            let handle = handle.clone();
            let inbox_id = inbox_id.clone();
            spawn_local(async move {
                match http::get_fragment(&logic::edit_form_url(&inbox_id)).await {
                    Ok(fragment) => {
                        if open_edit_row(&list).is_none() {
                            dom::prepend_html(&list, &logic::wrap_edit_fragment(&fragment));
                            if let Some(form_row) = open_edit_row(&list) {
                                install_exchange(
                                    &form_row,
                                    ExchangeKind::SingleInbox,
                                    CancelCleanup::None,
                                );
                            }
                        }
                    }
                    Err(err) => {
                        gloo::console::error!(format!("edit form failed to load: {err}"));
                        alerts::append_error_alert().await;
                    }
                }
                guard::release(&handle);
            });
        });
    }
}

fn open_edit_row(list: &Element) -> Option<Element> {
    list.first_element_child()
        .filter(|first| first.class_list().contains("inbox-edit-form-row"))
}

fn bind_add_inbox() {
    let Some(trigger) = dom::by_id("add-inbox") else {
        return;
    };
    let Some(form_url) = dom::data_attr(&trigger, "form-url") else {
        gloo::console::error!("add-inbox trigger is missing its data-form-url attribute");
        return;
    };
    let handle = trigger.clone();
    dom::on_click(&trigger, move |event| {
        event.prevent_default();
        if dom::by_id("inbox-add-form").is_some() || !guard::try_acquire(&handle) {
            return;
        }
        let handle = handle.clone();
        let form_url = form_url.clone();
        spawn_local(async move {
            match http::get_fragment(&form_url).await {
                Ok(fragment) => {
                    dom::insert_after(&handle, &logic::wrap_add_fragment(&fragment));
                    hide(&handle);
                    if let Some(panel) = dom::by_id("inbox-add-form") {
                        let cleanup = handle
                            .dyn_ref::<HtmlElement>()
                            .map_or(CancelCleanup::None, |html| {
                                CancelCleanup::ShowTrigger(html.clone())
                            });
                        install_exchange(&panel, ExchangeKind::AddInbox, cleanup);
                    }
                }
                Err(err) => {
                    gloo::console::error!(format!("add-inbox form failed to load: {err}"));
                    alerts::append_error_alert().await;
                }
            }
            guard::release(&handle);
        });
    });
}

fn hide(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}

fn show(element: &HtmlElement) {
    let _ = element.style().remove_property("display");
}

/// Wire a freshly inserted form row: cancel links dismiss it, submits go
/// through the status-code exchange.
fn install_exchange(form_row: &Element, kind: ExchangeKind, cleanup: CancelCleanup) {
    bind_cancel_links(form_row, cleanup);

    let Some(form) = dom::query(form_row, "form")
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let form_handle = form.clone();
    let form_row = form_row.clone();
    dom::on_submit(&form, move |event| {
        event.prevent_default();
        if guard::form_is_locked(&form_handle) {
            return;
        }
        guard::lock_form(&form_handle);

        let form = form_handle.clone();
        let form_row = form_row.clone();
        let kind = kind.clone();
        spawn_local(async move {
            let body = dom::serialize_form(&form);
            match http::post_form(&form.action(), &body).await {
                Ok((status, text)) => match ExchangeOutcome::classify(status) {
                    ExchangeOutcome::Applied => apply_applied(kind, &form, &form_row).await,
                    ExchangeOutcome::Rerender => {
                        form.set_inner_html(&text);
                        guard::reset_form(&form);
                    }
                    ExchangeOutcome::Failed(status) => {
                        gloo::console::log!(format!("form failed to POST ({status})"));
                        let error = snippets::snippet(SnippetKey::GenericError).await;
                        form.set_outer_html(&error);
                    }
                },
                Err(err) => {
                    gloo::console::error!(format!("form submission failed: {err}"));
                    let error = snippets::snippet(SnippetKey::GenericError).await;
                    form.set_outer_html(&error);
                }
            }
        });
    });
}

fn bind_cancel_links(form_row: &Element, cleanup: CancelCleanup) {
    let row = form_row.clone();
    dom::on_click(form_row, move |event| {
        let hit_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
            .is_some();
        if !hit_link {
            return;
        }
        event.prevent_default();
        row.remove();
        if let CancelCleanup::ShowTrigger(trigger) = &cleanup {
            show(trigger);
        }
    });
}

async fn apply_applied(kind: ExchangeKind, form: &HtmlFormElement, form_row: &Element) {
    match kind {
        ExchangeKind::SingleInbox => form_row.remove(),
        ExchangeKind::AddInbox => dom::reload_page(),
        ExchangeKind::HomeRow { row } => {
            let fields = read_edited_fields(form);
            repaint_row(&row, &fields).await;
            form_row.remove();
        }
    }
}

fn read_edited_fields(form: &HtmlFormElement) -> EditedFields {
    let input = |selector: &str| {
        dom::query(form, selector).and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    };
    EditedFields {
        description: input("#id_description").map(|i| i.value()).unwrap_or_default(),
        disabled: input("#id_disable_inbox").is_some_and(|i| i.checked()),
        pinned: input("#id_pinned").is_some_and(|i| i.checked()),
    }
}

async fn repaint_row(row: &Element, fields: &EditedFields) {
    if let Some(cell) = dom::query(row, ".inbox-description") {
        cell.set_text_content(Some(&fields.description));
    }

    let row_disabled = row.class_list().contains("inbox-disabled");
    let row_pinned = dom::query(row, "span.label-warning").is_some();
    for change in logic::plan_flag_changes(fields, row_disabled, row_pinned) {
        match change {
            FlagChange::Disable => {
                let _ = row.class_list().add_1("inbox-disabled");
                clear_flags(row);
                append_flag(row, SnippetKey::DisabledFlag).await;
            }
            FlagChange::Enable => {
                let _ = row.class_list().remove_1("inbox-disabled");
                clear_flags(row);
            }
            FlagChange::Pin => append_flag(row, SnippetKey::PinnedFlag).await,
            FlagChange::Unpin => {
                if let Some(badge) = dom::query(row, "span.label-warning") {
                    badge.remove();
                }
            }
        }
    }
}

fn clear_flags(row: &Element) {
    if let Some(flags) = dom::query(row, ".inbox-flags") {
        flags.set_inner_html("");
    }
}

async fn append_flag(row: &Element, key: SnippetKey) {
    if let Some(flags) = dom::query(row, ".inbox-flags") {
        let badge = snippets::snippet(key).await;
        dom::append_html(&flags, &badge);
    }
}

fn bind_pin_buttons() {
    for button in dom::document_query_all(".inbox-options button[name=pin-inbox]") {
        let handle = button.clone();
        dom::on_click(&button, move |event| {
            event.prevent_default();
            if !guard::try_acquire(&handle) {
                return;
            }
            let handle = handle.clone();
            spawn_local(async move {
                toggle_pin(&handle).await;
                guard::release(&handle);
            });
        });
    }
}

async fn toggle_pin(button: &Element) {
    let Some(form) = button
        .closest("form")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(url) = dom::data_attr(&form, "url") else {
        gloo::console::error!("pin form is missing its data-url attribute");
        return;
    };

    let mut body = dom::serialize_form(&form);
    body.push(
        button.get_attribute("name").unwrap_or_default(),
        button.get_attribute("value").unwrap_or_default(),
    );

    match http::post_form(&url, &body).await {
        Ok((204, _)) => {
            let Some(row) = dom::data_attr(&form, "inbox-selector").and_then(|id| dom::by_id(&id))
            else {
                return;
            };
            if let Some(badge) = dom::query(&row, "span.label-warning") {
                badge.remove();
            } else {
                append_flag(&row, SnippetKey::PinnedFlag).await;
            }
        }
        Ok(_) => alerts::append_error_alert().await,
        Err(err) => {
            gloo::console::error!(format!("pin toggle failed: {err}"));
            alerts::append_error_alert().await;
        }
    }
}
