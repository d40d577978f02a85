//! Keyboard focus.
//!
//! Focus is an exclusive claim by one element to receive keyboard
//! activation input. [`FocusRegistry`] tracks the current holder; moving
//! focus always unfocuses the previous holder before the new one is told it
//! gained focus.
//!
//! Widgets own a [`FocusHandle`], a shared flag the registry can flip. A
//! widget asks the registry for focus through its handle:
//!
//! ```
//! use mtk::widget::{FocusHandle, FocusRegistry};
//!
//! let mut registry = FocusRegistry::new();
//! let a = FocusHandle::new();
//! let b = FocusHandle::new();
//!
//! registry.focus_handle(&a);
//! registry.focus_handle(&b);
//! assert!(!a.is_focused());
//! assert!(b.is_focused());
//!
//! registry.focus(None);
//! assert!(!b.is_focused());
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use mtk_core::logging::targets;

/// An element that can hold keyboard focus.
pub trait Focusable {
    /// Called by the registry when the element gains or loses focus.
    fn set_focused(&self, focused: bool);

    /// Check whether the element currently holds focus.
    fn is_focused(&self) -> bool;
}

#[derive(Debug, Default)]
struct FocusState {
    focused: Cell<bool>,
}

impl Focusable for FocusState {
    fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }

    fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

/// Shared focus flag owned by a widget.
///
/// Cloning a handle yields another reference to the same flag; two handles
/// compare equal only if they share it.
#[derive(Clone, Default)]
pub struct FocusHandle(Rc<FocusState>);

impl FocusHandle {
    /// Create an unfocused handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the owning widget holds focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.0.is_focused()
    }

    /// Set the flag directly, bypassing the registry.
    ///
    /// Widgets use this to drop focus on their own (a dismissed message,
    /// for example). The registry may still name the handle as its holder
    /// until focus moves elsewhere.
    pub fn set_focused(&self, focused: bool) {
        self.0.set_focused(focused);
    }

    /// The handle as a registry entry.
    pub fn as_focusable(&self) -> Rc<dyn Focusable> {
        self.0.clone()
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for FocusHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FocusHandle {}

impl fmt::Debug for FocusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FocusHandle").field(&self.is_focused()).finish()
    }
}

/// Tracks the single element holding keyboard focus.
#[derive(Default)]
pub struct FocusRegistry {
    holder: Option<Rc<dyn Focusable>>,
}

impl FocusRegistry {
    /// Create a registry with no focused element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to `element`, or to nothing.
    ///
    /// The previous holder, if any, is unfocused first. Re-focusing the
    /// current holder performs the same unfocus/focus pair.
    pub fn focus(&mut self, element: Option<Rc<dyn Focusable>>) {
        if let Some(previous) = self.holder.take() {
            previous.set_focused(false);
        }
        if let Some(next) = &element {
            next.set_focused(true);
        }
        tracing::trace!(
            target: targets::FOCUS,
            focused = element.is_some(),
            "focus moved"
        );
        self.holder = element;
    }

    /// Move focus to the widget owning `handle`.
    pub fn focus_handle(&mut self, handle: &FocusHandle) {
        self.focus(Some(handle.as_focusable()));
    }

    /// Drop focus if `handle` is the current holder.
    ///
    /// Returns `true` if focus was released.
    pub fn release(&mut self, handle: &FocusHandle) -> bool {
        if self.holds(handle) {
            self.focus(None);
            true
        } else {
            false
        }
    }

    /// Unfocus the current holder, if any.
    pub fn clear(&mut self) {
        self.focus(None);
    }

    /// Check whether `handle` is the current holder.
    pub fn holds(&self, handle: &FocusHandle) -> bool {
        self.holder
            .as_ref()
            .is_some_and(|holder| Rc::as_ptr(holder) as *const () == handle.addr())
    }

    /// Check whether any element holds focus.
    pub fn has_focus(&self) -> bool {
        self.holder.is_some()
    }

    /// The current holder.
    pub fn focused(&self) -> Option<&Rc<dyn Focusable>> {
        self.holder.as_ref()
    }
}

impl fmt::Debug for FocusRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRegistry")
            .field("has_focus", &self.has_focus())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every focus change it observes into a shared log.
    struct Probe {
        name: &'static str,
        focused: Cell<bool>,
        log: Rc<RefCell<Vec<(&'static str, bool)>>>,
    }

    impl Focusable for Probe {
        fn set_focused(&self, focused: bool) {
            self.focused.set(focused);
            self.log.borrow_mut().push((self.name, focused));
        }

        fn is_focused(&self) -> bool {
            self.focused.get()
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<(&'static str, bool)>>>) -> Rc<Probe> {
        Rc::new(Probe {
            name,
            focused: Cell::new(false),
            log: log.clone(),
        })
    }

    #[test]
    fn test_unfocus_precedes_focus() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = probe("a", &log);
        let b = probe("b", &log);
        let mut registry = FocusRegistry::new();

        registry.focus(Some(a.clone()));
        registry.focus(Some(b.clone()));
        registry.focus(None);

        assert_eq!(
            *log.borrow(),
            vec![("a", true), ("a", false), ("b", true), ("b", false)]
        );
        assert!(!a.is_focused());
        assert!(!b.is_focused());
        assert!(!registry.has_focus());
    }

    #[test]
    fn test_at_most_one_holder() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let probes = [probe("a", &log), probe("b", &log), probe("c", &log)];
        let mut registry = FocusRegistry::new();

        for step in [0usize, 2, 1, 1, 0, 2] {
            registry.focus(Some(probes[step].clone()));
            let holders = probes.iter().filter(|p| p.is_focused()).count();
            assert_eq!(holders, 1);
            assert!(probes[step].is_focused());
        }
    }

    #[test]
    fn test_refocus_same_element_is_not_short_circuited() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = probe("a", &log);
        let mut registry = FocusRegistry::new();

        registry.focus(Some(a.clone()));
        registry.focus(Some(a.clone()));

        assert_eq!(*log.borrow(), vec![("a", true), ("a", false), ("a", true)]);
        assert!(a.is_focused());
    }

    #[test]
    fn test_handles() {
        let mut registry = FocusRegistry::new();
        let a = FocusHandle::new();
        let b = FocusHandle::new();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        registry.focus_handle(&a);
        assert!(registry.holds(&a));
        assert!(!registry.holds(&b));

        assert!(!registry.release(&b));
        assert!(a.is_focused());

        assert!(registry.release(&a));
        assert!(!a.is_focused());
        assert!(!registry.has_focus());
    }

    #[test]
    fn test_clear() {
        let mut registry = FocusRegistry::new();
        let a = FocusHandle::new();
        registry.focus_handle(&a);
        registry.clear();
        assert!(!a.is_focused());
        registry.clear();
        assert!(registry.focused().is_none());
    }
}
