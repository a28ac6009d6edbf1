//! Per-row context menu

use std::fmt;

use super::Key;
use super::ListenerKind;
use super::ListenerRegistry;
use super::PointerTarget;
use super::Subscription;
use super::UiEvent;

/// Item chosen from a row's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Filter,
    Read,
    Update,
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Filter,
        MenuAction::Read,
        MenuAction::Update,
        MenuAction::Delete,
    ];

    /// Menu item label.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Filter => "Filter",
            MenuAction::Read => "Read",
            MenuAction::Update => "Update",
            MenuAction::Delete => "Delete",
        }
    }

    /// Parse a case-insensitive action name.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Screen position the menu was opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An action chosen from the menu, bound to the row it was opened on.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIntent<R> {
    pub action: MenuAction,
    pub row: R,
}

#[derive(Debug)]
struct OpenMenu<R> {
    position: Position,
    row: R,
    _subscriptions: Vec<Subscription>,
}

/// Context menu state: closed, or open at a position on a captured row.
///
/// The captured row is a copy taken when the menu opens, so later changes to
/// the table's rows never affect which row an action is bound to.
#[derive(Debug)]
pub struct ContextMenu<R> {
    registry: ListenerRegistry,
    open: Option<OpenMenu<R>>,
}

impl<R: Clone> ContextMenu<R> {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            open: None,
        }
    }

    /// Opens the menu on `row`, replacing any menu already open.
    pub fn open(&mut self, position: Position, row: R) {
        self.close();
        let subscriptions = ListenerKind::ALL
            .into_iter()
            .map(|kind| self.registry.subscribe(kind))
            .collect();
        self.open = Some(OpenMenu {
            position,
            row,
            _subscriptions: subscriptions,
        });
    }

    /// Closes the menu without emitting an action. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn position(&self) -> Option<Position> {
        self.open.as_ref().map(|menu| menu.position)
    }

    /// Row the open menu is bound to.
    pub fn row(&self) -> Option<&R> {
        self.open.as_ref().map(|menu| &menu.row)
    }

    /// Delivers a global event. Returns `true` if the event dismissed the menu.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        if self.open.is_none() || !self.registry.is_listening(event.kind()) {
            return false;
        }

        let dismiss = match event {
            UiEvent::PointerDown(target) => *target == PointerTarget::Outside,
            UiEvent::KeyDown(key) => *key == Key::Escape,
            UiEvent::Scroll | UiEvent::Resize => true,
        };

        if dismiss {
            self.close();
        }
        dismiss
    }

    /// Chooses a menu item, closing the menu and emitting the bound intent.
    pub fn choose(&mut self, action: MenuAction) -> Option<RowIntent<R>> {
        self.open
            .take()
            .map(|menu| RowIntent { action, row: menu.row })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> (ListenerRegistry, ContextMenu<&'static str>) {
        let registry = ListenerRegistry::new();
        let menu = ContextMenu::new(registry.clone());
        (registry, menu)
    }

    #[test]
    fn test_open_attaches_all_listeners() {
        let (registry, mut menu) = menu();
        menu.open(Position::new(3, 4), "row");

        assert!(menu.is_open());
        assert_eq!(menu.position(), Some(Position::new(3, 4)));
        assert_eq!(registry.listener_count(), ListenerKind::ALL.len());
    }

    #[test]
    fn test_reopen_replaces_previous_menu() {
        let (registry, mut menu) = menu();
        menu.open(Position::default(), "first");
        menu.open(Position::default(), "second");

        assert_eq!(menu.row(), Some(&"second"));
        assert_eq!(registry.listener_count(), ListenerKind::ALL.len());
    }

    #[test]
    fn test_dismissal_events() {
        let dismissing = [
            UiEvent::PointerDown(PointerTarget::Outside),
            UiEvent::KeyDown(Key::Escape),
            UiEvent::Scroll,
            UiEvent::Resize,
        ];
        for event in dismissing {
            let (registry, mut menu) = menu();
            menu.open(Position::default(), "row");
            assert!(menu.handle_event(&event), "{event:?} should dismiss");
            assert!(!menu.is_open());
            assert_eq!(registry.listener_count(), 0);
        }
    }

    #[test]
    fn test_non_dismissal_events() {
        let (registry, mut menu) = menu();
        menu.open(Position::default(), "row");

        assert!(!menu.handle_event(&UiEvent::PointerDown(PointerTarget::Menu)));
        assert!(!menu.handle_event(&UiEvent::KeyDown(Key::Char('j'))));
        assert!(menu.is_open());
        assert_eq!(registry.listener_count(), ListenerKind::ALL.len());
    }

    #[test]
    fn test_events_ignored_while_closed() {
        let (_registry, mut menu) = menu();
        assert!(!menu.handle_event(&UiEvent::Scroll));
    }

    #[test]
    fn test_choose_emits_once() {
        let (registry, mut menu) = menu();
        menu.open(Position::default(), "row");

        let intent = menu.choose(MenuAction::Update);
        assert_eq!(
            intent,
            Some(RowIntent {
                action: MenuAction::Update,
                row: "row"
            })
        );
        assert_eq!(menu.choose(MenuAction::Update), None);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(MenuAction::parse("DELETE"), Some(MenuAction::Delete));
        assert_eq!(MenuAction::parse(" filter "), Some(MenuAction::Filter));
        assert_eq!(MenuAction::parse("edit"), None);
    }
}
