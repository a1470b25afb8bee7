//! The bulk action vocabulary.
//!
//! Buttons in the message list's action bar carry their verb in the
//! button's `name`; the per-row toggle carries its row in the button's
//! `value`. The server owns the semantics; the enum here only decides
//! which local row mutation mirrors a confirmed action.

/// A parsed action-bar button press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BulkAction {
    /// Flag every checked row important.
    Mark,
    /// Clear the important flag on every checked row.
    Unmark,
    /// Delete every checked row.
    Delete,
    /// Toggle the important flag on one row, checkboxes ignored.
    ToggleSingle {
        /// The row the button belongs to.
        row_id: String,
    },
    /// A button this crate does not know; the press becomes a no-op
    /// rather than a guess.
    Unknown,
}

/// The local DOM mutation mirroring a server-confirmed action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationKind {
    /// Add the important badge if the row lacks one.
    AddFlag,
    /// Remove the important badge if present.
    RemoveFlag,
    /// Remove the whole row.
    RemoveRow,
    /// Add the badge when absent, remove it when present.
    ToggleFlag,
}

impl BulkAction {
    /// Parse a pressed button's wire `name` and `value`.
    #[must_use]
    pub fn parse(name: &str, value: &str) -> Self {
        match name {
            "important" => Self::Mark,
            "unimportant" => Self::Unmark,
            "delete" => Self::Delete,
            "important-single" => Self::ToggleSingle {
                row_id: value.to_owned(),
            },
            _ => Self::Unknown,
        }
    }

    /// The mutation applied to each checked row, or `None` when the
    /// action does not operate on the checked set.
    #[must_use]
    pub const fn mutation_for_checked(&self) -> Option<MutationKind> {
        match self {
            Self::Mark => Some(MutationKind::AddFlag),
            Self::Unmark => Some(MutationKind::RemoveFlag),
            Self::Delete => Some(MutationKind::RemoveRow),
            Self::ToggleSingle { .. } | Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BulkAction, MutationKind};

    #[test]
    fn wire_names_parse_to_their_verbs() {
        assert_eq!(BulkAction::parse("important", ""), BulkAction::Mark);
        assert_eq!(BulkAction::parse("unimportant", ""), BulkAction::Unmark);
        assert_eq!(BulkAction::parse("delete", ""), BulkAction::Delete);
        assert_eq!(
            BulkAction::parse("important-single", "abc123"),
            BulkAction::ToggleSingle {
                row_id: "abc123".to_owned()
            }
        );
    }

    #[test]
    fn unknown_names_never_mutate() {
        let action = BulkAction::parse("archive", "email");
        assert_eq!(action, BulkAction::Unknown);
        assert!(action.mutation_for_checked().is_none());
    }

    #[test]
    fn checked_set_mutations() {
        assert_eq!(
            BulkAction::Mark.mutation_for_checked(),
            Some(MutationKind::AddFlag)
        );
        assert_eq!(
            BulkAction::Unmark.mutation_for_checked(),
            Some(MutationKind::RemoveFlag)
        );
        assert_eq!(
            BulkAction::Delete.mutation_for_checked(),
            Some(MutationKind::RemoveRow)
        );
        assert!(
            BulkAction::ToggleSingle {
                row_id: "x".to_owned()
            }
            .mutation_for_checked()
            .is_none()
        );
    }
}
