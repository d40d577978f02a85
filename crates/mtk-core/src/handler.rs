//! Injected callbacks that borrow their owner.
//!
//! Widgets store their click/change/accept callbacks as [`Handler`] fields.
//! A handler is optional: an unset handler is a valid "no-op" configuration
//! and firing it does nothing.
//!
//! Because the handler lives inside the widget it receives, firing works by
//! lending: the callback is moved out of its field, invoked with the widget,
//! and moved back unless the callback called `set` or `clear` on its own
//! field meanwhile.

use std::fmt;

/// An optional callback invoked with a mutable reference to its owner.
///
/// `T` is the owner type (usually the widget itself) and `A` is an extra
/// argument passed by value on every call.
pub struct Handler<T: ?Sized, A = ()> {
    callback: Option<Box<dyn FnMut(&mut T, A)>>,
    // Bumped by `set` and `clear` so `fire` can tell whether the lent
    // callback was replaced or removed while it ran.
    generation: u64,
}

impl<T: ?Sized, A> Handler<T, A> {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self {
            callback: None,
            generation: 0,
        }
    }

    /// Create a handler from a closure.
    pub fn from_fn<F>(callback: F) -> Self
    where
        F: FnMut(&mut T, A) + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            generation: 0,
        }
    }

    /// Install a callback, replacing any previous one.
    pub fn set<F>(&mut self, callback: F)
    where
        F: FnMut(&mut T, A) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self.generation = self.generation.wrapping_add(1);
    }

    /// Remove the callback.
    pub fn clear(&mut self) {
        self.callback = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Check whether a callback is installed.
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Fire the handler stored in `target` at `field`.
    ///
    /// Returns `true` if a callback was installed and ran. A callback that
    /// clears or replaces its own handler while running is not restored.
    pub fn fire(target: &mut T, field: fn(&mut T) -> &mut Handler<T, A>, args: A) -> bool {
        let slot = field(target);
        let Some(mut callback) = slot.callback.take() else {
            return false;
        };
        let generation = slot.generation;
        callback(target, args);
        let slot = field(target);
        if slot.generation == generation {
            slot.callback = Some(callback);
        }
        true
    }
}

impl<T: ?Sized, A> Default for Handler<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, A> fmt::Debug for Handler<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("set", &self.is_set()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Owner {
        hits: Vec<i32>,
        on_hit: Handler<Owner, i32>,
    }

    impl Owner {
        fn new() -> Self {
            Self {
                hits: Vec::new(),
                on_hit: Handler::new(),
            }
        }

        fn hit(&mut self, n: i32) -> bool {
            Handler::fire(self, |o| &mut o.on_hit, n)
        }
    }

    #[test]
    fn test_unset_handler_is_noop() {
        let mut owner = Owner::new();
        assert!(!owner.on_hit.is_set());
        assert!(!owner.hit(1));
        assert!(owner.hits.is_empty());
    }

    #[test]
    fn test_handler_receives_owner() {
        let mut owner = Owner::new();
        owner.on_hit.set(|o, n| o.hits.push(n));
        assert!(owner.hit(3));
        assert!(owner.hit(4));
        assert_eq!(owner.hits, vec![3, 4]);
        assert!(owner.on_hit.is_set());
    }

    #[test]
    fn test_handler_may_replace_itself() {
        let mut owner = Owner::new();
        owner.on_hit.set(|o, n| {
            o.hits.push(n);
            o.on_hit.set(|o, n| o.hits.push(n * 10));
        });
        owner.hit(1);
        owner.hit(2);
        assert_eq!(owner.hits, vec![1, 20]);
    }

    #[test]
    fn test_handler_may_clear_itself() {
        let mut owner = Owner::new();
        owner.on_hit.set(|o, n| {
            o.hits.push(n);
            o.on_hit.clear();
        });
        assert!(owner.hit(1));
        assert!(!owner.on_hit.is_set());
        assert!(!owner.hit(2));
        assert_eq!(owner.hits, vec![1]);
    }

    #[test]
    fn test_handler_cleared_then_reinstalled_keeps_new_callback() {
        let mut owner = Owner::new();
        owner.on_hit.set(|o, n| {
            o.hits.push(n);
            o.on_hit.clear();
            o.on_hit.set(|o, n| o.hits.push(-n));
        });
        owner.hit(1);
        owner.hit(2);
        assert_eq!(owner.hits, vec![1, -2]);
    }
}
