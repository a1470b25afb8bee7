//! Bindings for the search box and the result-poll loop.
//!
//! The loop is a single task sleeping between probes rather than an
//! interval timer, so a slow probe can never overlap the next one.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::features::search::state::{self, PollVerdict};
use crate::services::http;
use crate::services::snippets::{self, SnippetKey};
use crate::services::dom;

pub(crate) fn bind() {
    bind_search_box();
    bind_poll_loop();
}

fn bind_search_box() {
    let Some(form) = dom::by_id("inboxen-search-box")
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let handle = form.clone();
    dom::on_submit(&form, move |event| {
        event.prevent_default();
        let query = dom::query(&handle, "input[name=q]")
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        dom::navigate_to(&state::results_url(&handle.action(), &query));
    });
}

fn bind_poll_loop() {
    let Some(note) = dom::by_id("search-refreshnote") else {
        return;
    };
    let Some(url) = dom::data_attr(&note, "url") else {
        gloo::console::error!("refresh note is missing its data-url attribute");
        return;
    };

    // The server-rendered fallback text only applies without wasm.
    note.set_inner_html("");

    spawn_local(async move {
        loop {
            gloo_timers::future::sleep(state::POLL_INTERVAL).await;
            let verdict = match http::head_status(&url).await {
                Ok(status) => PollVerdict::classify(status),
                Err(err) => {
                    gloo::console::error!(format!("search poll failed: {err}"));
                    PollVerdict::Failed
                }
            };
            match verdict {
                PollVerdict::Continue => note.set_inner_html(""),
                PollVerdict::Done => {
                    let text = snippets::snippet(SnippetKey::SearchLoadingText).await;
                    note.set_inner_html(&text);
                    dom::reload_page();
                }
                PollVerdict::TimedOut => {
                    if let Some(info) = dom::by_id("search-info") {
                        let text = snippets::snippet(SnippetKey::SearchTimedOut).await;
                        info.set_inner_html(&text);
                    }
                    gloo::console::error!("server says there is no such search");
                }
                PollVerdict::Failed => {
                    if let Some(info) = dom::by_id("search-info") {
                        let error = snippets::snippet(SnippetKey::GenericError).await;
                        info.set_outer_html(&error);
                    }
                    gloo::console::error!("unexpected search poll response");
                }
            }
            if verdict.is_terminal() {
                break;
            }
        }
    });
}
