//! UI events and the dismissal listener registry
//!
//! A [`ListenerRegistry`] plays the role of the document-level event target.
//! Components that need to react to global events subscribe to it and hold
//! the returned [`Subscription`]; dropping the subscription deregisters it.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::Weak;

/// Where a pointer-down landed relative to an open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Menu,
    Outside,
}

/// Keys the grid cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
}

/// A global UI event delivered to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PointerDown(PointerTarget),
    KeyDown(Key),
    Scroll,
    Resize,
}

impl UiEvent {
    /// The listener kind this event is dispatched to.
    pub fn kind(&self) -> ListenerKind {
        match self {
            UiEvent::PointerDown(_) => ListenerKind::PointerDown,
            UiEvent::KeyDown(_) => ListenerKind::KeyDown,
            UiEvent::Scroll => ListenerKind::Scroll,
            UiEvent::Resize => ListenerKind::Resize,
        }
    }
}

/// Kind of global event a listener is attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
    Scroll,
    Resize,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::PointerDown,
        ListenerKind::KeyDown,
        ListenerKind::Scroll,
        ListenerKind::Resize,
    ];
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    listeners: HashMap<u64, ListenerKind>,
}

/// Shared set of attached global listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for `kind`. It stays attached until the guard is dropped.
    pub fn subscribe(&self, kind: ListenerKind) -> Subscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, kind);
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of attached listeners of any kind.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Whether at least one listener is attached for `kind`.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.lock().listeners.values().any(|k| *k == kind)
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        lock_inner(&self.inner)
    }
}

fn lock_inner(inner: &Mutex<RegistryInner>) -> MutexGuard<'_, RegistryInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Guard for an attached listener. Dropping it detaches the listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<RegistryInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            lock_inner(&inner).listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_drop_detaches() {
        let registry = ListenerRegistry::new();
        let a = registry.subscribe(ListenerKind::Scroll);
        let b = registry.subscribe(ListenerKind::Resize);
        assert_eq!(registry.listener_count(), 2);
        assert!(registry.is_listening(ListenerKind::Scroll));

        drop(a);
        assert_eq!(registry.listener_count(), 1);
        assert!(!registry.is_listening(ListenerKind::Scroll));

        drop(b);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_registry() {
        let registry = ListenerRegistry::new();
        let sub = registry.subscribe(ListenerKind::KeyDown);
        drop(registry);
        drop(sub);
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(
            UiEvent::PointerDown(PointerTarget::Outside).kind(),
            ListenerKind::PointerDown
        );
        assert_eq!(UiEvent::KeyDown(Key::Escape).kind(), ListenerKind::KeyDown);
    }
}
