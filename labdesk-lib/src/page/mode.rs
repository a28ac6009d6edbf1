//! Modal modes

use std::fmt;

use crate::grid::MenuAction;

/// The single modal a page can show at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    Filter,
    Create,
    Read,
    Update,
    Delete,
    ReadById,
    UpdateById,
    DeleteById,
}

impl ModalMode {
    pub fn is_open(self) -> bool {
        self != ModalMode::Closed
    }

    /// The action an id-entry modal resolves into.
    pub fn by_id_action(self) -> Option<ByIdAction> {
        match self {
            ModalMode::ReadById => Some(ByIdAction::Read),
            ModalMode::UpdateById => Some(ByIdAction::Update),
            ModalMode::DeleteById => Some(ByIdAction::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for ModalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalMode::Closed => "none",
            ModalMode::Filter => "filter",
            ModalMode::Create => "create",
            ModalMode::Read => "read",
            ModalMode::Update => "update",
            ModalMode::Delete => "delete",
            ModalMode::ReadById => "readById",
            ModalMode::UpdateById => "updateById",
            ModalMode::DeleteById => "deleteById",
        };
        f.write_str(name)
    }
}

/// Action started from the top bar by entering an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByIdAction {
    Read,
    Update,
    Delete,
}

impl ByIdAction {
    /// Id-entry modal for this action.
    pub fn entry_mode(self) -> ModalMode {
        match self {
            ByIdAction::Read => ModalMode::ReadById,
            ByIdAction::Update => ModalMode::UpdateById,
            ByIdAction::Delete => ModalMode::DeleteById,
        }
    }

    /// The context-menu item this action converges with.
    pub fn menu_action(self) -> MenuAction {
        match self {
            ByIdAction::Read => MenuAction::Read,
            ByIdAction::Update => MenuAction::Update,
            ByIdAction::Delete => MenuAction::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_round_trip() {
        for action in [ByIdAction::Read, ByIdAction::Update, ByIdAction::Delete] {
            assert_eq!(action.entry_mode().by_id_action(), Some(action));
        }
        assert_eq!(ModalMode::Create.by_id_action(), None);
    }

    #[test]
    fn test_default_is_closed() {
        assert!(!ModalMode::default().is_open());
        assert_eq!(ModalMode::UpdateById.to_string(), "updateById");
    }
}
