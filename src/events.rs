//! In-process notifications
//!
//! Replaces a global event bus: each emitter owns a typed [`Listeners`] list
//! and consumers register callbacks on it.

use std::cell::RefCell;
use std::fmt;

type Callback<E> = Box<dyn Fn(&E)>;

/// Fire-and-forget callback list for events of type `E`
pub struct Listeners<E> {
    callbacks: RefCell<Vec<Callback<E>>>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback. Must not be called from inside a callback of the same list.
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) {
        self.callbacks.borrow_mut().push(Box::new(callback));
    }

    /// Call every registered callback in registration order
    pub fn emit(&self, event: &E) {
        for callback in self.callbacks.borrow().iter() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_listener() {
        let listeners: Listeners<u32> = Listeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            listeners.subscribe(move |value: &u32| seen.borrow_mut().push(format!("{}{}", tag, value)));
        }

        listeners.emit(&7);
        assert_eq!(*seen.borrow(), vec!["a7".to_string(), "b7".to_string()]);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn test_emit_without_listeners() {
        let listeners: Listeners<String> = Listeners::default();
        assert!(listeners.is_empty());
        listeners.emit(&"nobody".to_string());
    }
}
