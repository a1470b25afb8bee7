//! Localized HTML snippets.
//!
//! The server exposes one JSON object of snippet HTML at
//! [`SNIPPETS_URL`], rendered in the user's language. The map is fetched
//! once per page and cached for the page's lifetime; if the fetch fails
//! or a key is absent, the English default ships baked into the binary.
//!
//! The cache is deliberately lock-free: two lookups racing on first use
//! may both fetch, both write identical data, and the last write wins.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use crate::services::http;

/// Where the server serves the snippet map.
pub const SNIPPETS_URL: &str = "/i18n/snippets.json";

/// The snippet keys this crate consumes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SnippetKey {
    /// Badge shown on a pinned inbox row.
    PinnedFlag,
    /// Badge shown on a disabled inbox row.
    DisabledFlag,
    /// Badge shown on a message row flagged important.
    ImportantFlag,
    /// Dismissable "something went wrong" alert.
    GenericError,
    /// Close button appended to dismissable alerts.
    CloseAlertButton,
    /// Text shown while search results are about to reload.
    SearchLoadingText,
    /// Message shown when the server forgot the search.
    SearchTimedOut,
}

impl SnippetKey {
    /// The key's name in the served JSON object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PinnedFlag => "pinned-flag",
            Self::DisabledFlag => "disabled-flag",
            Self::ImportantFlag => "important-flag",
            Self::GenericError => "generic-error",
            Self::CloseAlertButton => "close-alert-button",
            Self::SearchLoadingText => "search-loading-text",
            Self::SearchTimedOut => "search-timed-out",
        }
    }

    /// English fallback markup, used when the fetch fails or the served
    /// map lacks the key.
    #[must_use]
    pub const fn default_html(self) -> &'static str {
        match self {
            Self::PinnedFlag => concat!(
                r#"<span class="label label-warning" title="Inbox has been pinned">"#,
                "Pinned</span>",
            ),
            Self::DisabledFlag => concat!(
                r#"<span class="label label-default" title="Inbox has been disabled">"#,
                "Disabled</span>",
            ),
            Self::ImportantFlag => concat!(
                r#"<span class="label label-danger" "#,
                r#"title="Message has been marked as important">Important</span>"#,
            ),
            Self::GenericError => {
                r#"<div class="alert alert-warning" role="alert">Something went wrong!</div>"#
            }
            Self::CloseAlertButton => concat!(
                r#"<button type="button" class="close" data-dismiss="alert">"#,
                r#"<span class="fa fa-times" aria-hidden="true"></span>"#,
                r#"<span class="sr-only">Close</span></button>"#,
            ),
            Self::SearchLoadingText => "Loading results\u{2026}",
            Self::SearchTimedOut => "The search timed out. Please try again.",
        }
    }
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static CACHE: RefCell<Option<HashMap<String, String>>> = const { RefCell::new(None) };
}

/// Resolve a snippet, fetching the served map on first use.
#[cfg(target_arch = "wasm32")]
pub async fn snippet(key: SnippetKey) -> String {
    if !CACHE.with(|cell| cell.borrow().is_some()) {
        let fetched = match http::get_json::<HashMap<String, String>>(SNIPPETS_URL).await {
            Ok(map) => map,
            Err(err) => {
                gloo::console::error!(format!("snippet fetch failed, using defaults: {err}"));
                HashMap::new()
            }
        };
        CACHE.with(|cell| *cell.borrow_mut() = Some(fetched));
    }
    CACHE
        .with(|cell| {
            cell.borrow()
                .as_ref()
                .and_then(|map| map.get(key.as_str()).cloned())
        })
        .unwrap_or_else(|| key.default_html().to_owned())
}

/// Populate the cache ahead of the first real lookup.
#[cfg(target_arch = "wasm32")]
pub async fn warm() {
    let _ = snippet(SnippetKey::GenericError).await;
}

#[cfg(test)]
mod tests {
    use super::SnippetKey;

    #[test]
    fn keys_match_the_served_names() {
        assert_eq!(SnippetKey::PinnedFlag.as_str(), "pinned-flag");
        assert_eq!(SnippetKey::DisabledFlag.as_str(), "disabled-flag");
        assert_eq!(SnippetKey::ImportantFlag.as_str(), "important-flag");
        assert_eq!(SnippetKey::GenericError.as_str(), "generic-error");
        assert_eq!(SnippetKey::CloseAlertButton.as_str(), "close-alert-button");
        assert_eq!(SnippetKey::SearchLoadingText.as_str(), "search-loading-text");
        assert_eq!(SnippetKey::SearchTimedOut.as_str(), "search-timed-out");
    }

    #[test]
    fn defaults_carry_the_row_badge_classes() {
        assert!(SnippetKey::PinnedFlag.default_html().contains("label-warning"));
        assert!(SnippetKey::DisabledFlag.default_html().contains("label-default"));
        assert!(SnippetKey::ImportantFlag.default_html().contains("label-danger"));
        assert!(SnippetKey::GenericError.default_html().contains("role=\"alert\""));
    }
}
