//! DOM-free planning for the inline inbox forms.

/// URL of the server-rendered edit form for one inbox row.
#[must_use]
pub fn edit_form_url(row_id: &str) -> String {
    format!("/forms/inbox/edit/{row_id}/")
}

/// Wrap a fetched edit-form fragment in the row markup the surrounding
/// grid expects.
#[must_use]
pub fn wrap_edit_fragment(fragment: &str) -> String {
    format!(
        "<div class=\"inbox-edit-form-row row\"><div class=\"col-xs-12\">{fragment}</div></div>"
    )
}

/// Wrap the fetched add-inbox fragment in its centered panel markup.
#[must_use]
pub fn wrap_add_fragment(fragment: &str) -> String {
    format!(
        concat!(
            "<div id=\"inbox-add-form\" class=\"row\">",
            "<div class=\"col-xs-12 col-sm-6 col-sm-offset-3 col-md-4 col-md-offset-4 ",
            "col-lg-4 col-lg-offset-4\">",
            "<div class=\"panel panel-default\"><div class=\"panel-body\">{}</div></div>",
            "</div></div>"
        ),
        fragment
    )
}

/// The fields read back out of a submitted edit form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditedFields {
    /// Free-text description for the row's description cell.
    pub description: String,
    /// Whether the "disable this inbox" box was checked.
    pub disabled: bool,
    /// Whether the "pin to top" box was checked.
    pub pinned: bool,
}

/// What to do to a row's flag badges after a 204.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlagChange {
    /// Mark the row disabled: add the row class, clear every badge, show
    /// the disabled badge.
    Disable,
    /// Re-enable the row: drop the row class and clear every badge.
    Enable,
    /// Show the pinned badge.
    Pin,
    /// Remove the pinned badge if present.
    Unpin,
}

/// Plan the badge updates for a row given the submitted fields and the
/// row's current state, in application order. Disabling suppresses the
/// pin handling entirely; re-enabling clears the badges, so a kept pin
/// is re-added right after.
#[must_use]
pub fn plan_flag_changes(
    fields: &EditedFields,
    row_disabled: bool,
    row_pinned: bool,
) -> Vec<FlagChange> {
    let mut changes = Vec::new();
    if fields.disabled {
        if !row_disabled {
            changes.push(FlagChange::Disable);
        }
        return changes;
    }
    let mut pinned_badge_present = row_pinned;
    if row_disabled {
        changes.push(FlagChange::Enable);
        pinned_badge_present = false;
    }
    if fields.pinned {
        if !pinned_badge_present {
            changes.push(FlagChange::Pin);
        }
    } else if pinned_badge_present {
        changes.push(FlagChange::Unpin);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::{
        EditedFields, FlagChange, edit_form_url, plan_flag_changes, wrap_add_fragment,
        wrap_edit_fragment,
    };

    fn fields(disabled: bool, pinned: bool) -> EditedFields {
        EditedFields {
            description: String::new(),
            disabled,
            pinned,
        }
    }

    #[test]
    fn edit_url_embeds_the_row_id() {
        assert_eq!(
            edit_form_url("cheese.sandwich@example.com"),
            "/forms/inbox/edit/cheese.sandwich@example.com/"
        );
    }

    #[test]
    fn wrapped_fragment_keeps_the_fragment_verbatim() {
        let wrapped = wrap_edit_fragment("<form><p>&amp;</p></form>");
        assert!(wrapped.starts_with("<div class=\"inbox-edit-form-row row\">"));
        assert!(wrapped.contains("<form><p>&amp;</p></form>"));
    }

    #[test]
    fn add_panel_carries_its_id_for_the_open_check() {
        let wrapped = wrap_add_fragment("<form></form>");
        assert!(wrapped.contains("id=\"inbox-add-form\""));
        assert!(wrapped.contains("panel-body"));
        assert!(wrapped.contains("<form></form>"));
    }

    #[test]
    fn disabling_clears_badges_once() {
        assert_eq!(
            plan_flag_changes(&fields(true, false), false, false),
            vec![FlagChange::Disable]
        );
        // Already disabled: nothing to redraw.
        assert!(plan_flag_changes(&fields(true, true), true, true).is_empty());
    }

    #[test]
    fn enabling_readds_a_kept_pin() {
        assert_eq!(
            plan_flag_changes(&fields(false, true), true, true),
            vec![FlagChange::Enable, FlagChange::Pin]
        );
        assert_eq!(
            plan_flag_changes(&fields(false, false), true, false),
            vec![FlagChange::Enable]
        );
    }

    #[test]
    fn pinning_is_idempotent() {
        assert_eq!(
            plan_flag_changes(&fields(false, true), false, false),
            vec![FlagChange::Pin]
        );
        assert!(plan_flag_changes(&fields(false, true), false, true).is_empty());
        assert_eq!(
            plan_flag_changes(&fields(false, false), false, true),
            vec![FlagChange::Unpin]
        );
        assert!(plan_flag_changes(&fields(false, false), false, false).is_empty());
    }
}
