//! Data-attribute configuration for the copy buttons.
//!
//! Any element opting in with `data-copy-inbox` describes its own
//! markup: where the address text lives, where the button goes, and how
//! the button is styled. Selectors stay opaque strings here; the view
//! resolves them.

use thiserror::Error;

/// A host element's copy-button configuration is incomplete.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("missing required data-{0} attribute")]
pub struct MissingAttr(
    /// The `data-` attribute name that was absent.
    pub &'static str,
);

/// Parsed copy-button configuration for one host element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopyConfig {
    /// Selector for the element holding the address text.
    pub inbox_name: String,
    /// Selector for the element the button is prepended into.
    pub button_container: String,
    /// Class attribute for the generated button.
    pub button_classes: String,
    /// Visible text after the clipboard icon, possibly empty.
    pub button_text: String,
    /// Tooltip title, also mirrored for screen readers.
    pub button_title: String,
    /// Selector for per-row children of the host; `None` means the host
    /// itself is the one row.
    pub children: Option<String>,
}

impl CopyConfig {
    /// Build from a `data-*` attribute lookup. The selector and class
    /// attributes are required; text, title, and children are optional.
    pub fn from_attrs(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MissingAttr> {
        let required = |name: &'static str| lookup(name).ok_or(MissingAttr(name));
        Ok(Self {
            inbox_name: required("inbox-name")?,
            button_container: required("button-container")?,
            button_classes: required("button-classes")?,
            button_text: lookup("button-text").unwrap_or_default(),
            button_title: lookup("button-title").unwrap_or_default(),
            children: lookup("children"),
        })
    }

    /// The button markup. The title is repeated in an `sr-only` span
    /// because screen readers skip the title attribute.
    #[must_use]
    pub fn button_markup(&self) -> String {
        format!(
            concat!(
                "<button type=\"button\" class=\"{classes}\" title=\"{title}\">",
                "<span class=\"fa fa-lg fa-clipboard\" aria-hidden=\"true\"></span>",
                "<span class=\"sr-only\">{title}</span>{text}</button>"
            ),
            classes = self.button_classes,
            title = self.button_title,
            text = self.button_text,
        )
    }
}

/// Unified-inbox rows list a display name, not an address; only real
/// addresses get a copy button.
#[must_use]
pub fn is_copyable_address(text: &str) -> bool {
    text.contains('@')
}

#[cfg(test)]
mod tests {
    use super::{CopyConfig, MissingAttr, is_copyable_address};
    use std::collections::HashMap;

    fn attrs(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn full_configuration_parses() {
        let map = attrs(&[
            ("inbox-name", ".inbox-name"),
            ("button-container", ".inbox-options"),
            ("button-classes", "btn btn-xs"),
            ("button-text", "Copy"),
            ("button-title", "Copy address"),
            ("children", "div.row"),
        ]);
        let config = CopyConfig::from_attrs(|name| map.get(name).cloned())
            .expect("all attributes are present");
        assert_eq!(config.inbox_name, ".inbox-name");
        assert_eq!(config.children.as_deref(), Some("div.row"));
    }

    #[test]
    fn optional_attributes_default_to_empty() {
        let map = attrs(&[
            ("inbox-name", ".inbox-name"),
            ("button-container", ".inbox-options"),
            ("button-classes", "btn"),
        ]);
        let config = CopyConfig::from_attrs(|name| map.get(name).cloned())
            .expect("required attributes are present");
        assert_eq!(config.button_text, "");
        assert_eq!(config.button_title, "");
        assert!(config.children.is_none());
    }

    #[test]
    fn missing_required_attribute_names_itself() {
        let map = attrs(&[("inbox-name", ".inbox-name"), ("button-classes", "btn")]);
        let err = CopyConfig::from_attrs(|name| map.get(name).cloned())
            .expect_err("button-container is missing");
        assert_eq!(err, MissingAttr("button-container"));
        assert_eq!(
            err.to_string(),
            "missing required data-button-container attribute"
        );
    }

    #[test]
    fn button_markup_mirrors_the_title_for_screen_readers() {
        let map = attrs(&[
            ("inbox-name", ".inbox-name"),
            ("button-container", ".inbox-options"),
            ("button-classes", "btn btn-xs"),
            ("button-title", "Copy address"),
        ]);
        let config = CopyConfig::from_attrs(|name| map.get(name).cloned())
            .expect("required attributes are present");
        let markup = config.button_markup();
        assert!(markup.contains("class=\"btn btn-xs\""));
        assert!(markup.contains("title=\"Copy address\""));
        assert!(markup.contains("<span class=\"sr-only\">Copy address</span>"));
        assert!(markup.contains("fa-clipboard"));
    }

    #[test]
    fn unified_inbox_rows_are_skipped() {
        assert!(is_copyable_address("cheese.sandwich@example.com"));
        assert!(!is_copyable_address("Unified inbox"));
        assert!(!is_copyable_address(""));
    }
}
