//! Row planning for confirmed bulk actions.

use crate::features::messages::actions::{BulkAction, MutationKind};

/// Marker value carried by each row checkbox.
pub const ROW_CHECKBOX_VALUE: &str = "email";

/// One row mutation to apply after the server confirms an action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedMutation {
    /// The server-assigned row identifier (the checkbox `name`).
    pub row_id: String,
    /// What to do to the row.
    pub kind: MutationKind,
}

/// Row ids of the checked rows in a serialized message-list form.
///
/// Checked rows serialize as `name=<row-id>`, `value="email"`; everything
/// else in the form (CSRF token and friends) has a different value.
#[must_use]
pub fn checked_row_ids(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(_, value)| value == ROW_CHECKBOX_VALUE)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Plan the row mutations for a confirmed action, in list order.
/// Unknown actions plan nothing.
#[must_use]
pub fn plan_mutations(action: &BulkAction, pairs: &[(String, String)]) -> Vec<PlannedMutation> {
    if let BulkAction::ToggleSingle { row_id } = action {
        return vec![PlannedMutation {
            row_id: row_id.clone(),
            kind: MutationKind::ToggleFlag,
        }];
    }
    action.mutation_for_checked().map_or_else(Vec::new, |kind| {
        checked_row_ids(pairs)
            .into_iter()
            .map(|row_id| PlannedMutation { row_id, kind })
            .collect()
    })
}

/// DOM id of a message row.
#[must_use]
pub fn row_element_id(row_id: &str) -> String {
    format!("email-{row_id}")
}

#[cfg(test)]
mod tests {
    use super::{checked_row_ids, plan_mutations, row_element_id};
    use crate::features::messages::actions::{BulkAction, MutationKind};

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn only_checkbox_pairs_count_as_rows() {
        let form = pairs(&[
            ("csrfmiddlewaretoken", "tok"),
            ("abc", "email"),
            ("def", "email"),
            ("q", "email stuff"),
        ]);
        assert_eq!(checked_row_ids(&form), vec!["abc", "def"]);
    }

    #[test]
    fn delete_removes_exactly_the_checked_rows() {
        let form = pairs(&[("csrfmiddlewaretoken", "tok"), ("abc", "email"), ("def", "email")]);
        let plan = plan_mutations(&BulkAction::Delete, &form);
        assert_eq!(plan.len(), 2);
        assert!(
            plan.iter()
                .all(|mutation| mutation.kind == MutationKind::RemoveRow)
        );
        assert_eq!(plan[0].row_id, "abc");
        assert_eq!(plan[1].row_id, "def");
    }

    #[test]
    fn single_toggle_ignores_the_checked_set() {
        let form = pairs(&[("abc", "email"), ("def", "email")]);
        let action = BulkAction::parse("important-single", "xyz");
        let plan = plan_mutations(&action, &form);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].row_id, "xyz");
        assert_eq!(plan[0].kind, MutationKind::ToggleFlag);
    }

    #[test]
    fn unknown_actions_plan_nothing() {
        let form = pairs(&[("abc", "email")]);
        assert!(plan_mutations(&BulkAction::Unknown, &form).is_empty());
    }

    #[test]
    fn nothing_checked_plans_nothing() {
        let form = pairs(&[("csrfmiddlewaretoken", "tok")]);
        assert!(plan_mutations(&BulkAction::Mark, &form).is_empty());
    }

    #[test]
    fn row_ids_map_to_prefixed_element_ids() {
        assert_eq!(row_element_id("abc123"), "email-abc123");
    }
}
