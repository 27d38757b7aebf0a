#![forbid(unsafe_code)]

//! Popup stack with top-only focus.
//!
//! Popups are transient overlay surfaces kept in a single stack, independent
//! of the layered focus chain. Each entry pairs the popup's source surface
//! with the display view the host built for it. Only the top view is ever
//! given focus.
//!
//! # Invariants
//!
//! - Entries are ordered bottom to top; the last entry is the current popup.
//! - A source has at most one entry.
//! - A view is destroyed exactly once, when its entry is removed.
//!
//! # Closing
//!
//! [`PopupStack::close_all_popups`] only asks each source to close. Entries
//! stay in the stack until the host reports the close through
//! [`PopupStack::remove_popup`], so the stack is not empty right after the
//! call.
//!
//! # Failure Modes
//!
//! - Factory returning `None`: `add_popup` returns `false`, stack unchanged.
//! - Source already stacked: `add_popup` returns `false`, factory not called.
//! - `remove_popup` for an unknown source: returns the current count, no callbacks.
//! - `give_focus` / `current_popup_source` on an empty stack: no-op / `None`.

use std::fmt;

use shellstack_core::{PopupConfig, PopupSource, PopupView, StackError};

/// A stacked popup: the source surface and its display view.
#[derive(Debug)]
pub struct PopupEntry<S, V> {
    source: S,
    view: V,
}

impl<S, V> PopupEntry<S, V> {
    /// The surface this popup shows.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The view built for the source.
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Stack of open popups.
#[derive(Debug)]
pub struct PopupStack<S, V> {
    /// Bottom to top.
    popups: Vec<PopupEntry<S, V>>,
    config: PopupConfig,
}

impl<S, V> Default for PopupStack<S, V> {
    fn default() -> Self {
        Self::with_config(PopupConfig::default())
    }
}

impl<S, V> PopupStack<S, V> {
    /// Create an empty popup stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty popup stack with the given settings.
    #[must_use]
    pub fn with_config(config: PopupConfig) -> Self {
        Self {
            popups: Vec::new(),
            config,
        }
    }

    /// Number of stacked popups.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.popups.len()
    }

    /// Check if no popup is stacked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }

    /// The top entry, if any.
    #[must_use]
    pub fn top(&self) -> Option<&PopupEntry<S, V>> {
        self.popups.last()
    }

    /// Source of the current (topmost) popup.
    #[must_use]
    pub fn current_popup_source(&self) -> Option<&S> {
        self.popups.last().map(|entry| &entry.source)
    }

    /// Entries, bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PopupEntry<S, V>> {
        self.popups.iter()
    }
}

impl<S: PopupSource, V: PopupView> PopupStack<S, V> {
    /// Whether `source` has an entry.
    #[must_use]
    pub fn contains(&self, source: &S) -> bool {
        self.popups.iter().any(|entry| entry.source == *source)
    }

    /// Build a view for `source` with `factory` and push it on top.
    ///
    /// Returns `false` when no entry was added; see [`Self::try_add_popup`].
    pub fn add_popup<C, F>(&mut self, factory: F, container: &C, source: S) -> bool
    where
        C: ?Sized,
        F: FnOnce(&C, &S) -> Option<V>,
    {
        match self.try_add_popup(factory, container, source) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "popup not added");
                false
            }
        }
    }

    /// Build a view for `source` with `factory` and push it on top.
    ///
    /// The factory receives the container the view should live in and the
    /// source it must display.
    ///
    /// # Errors
    ///
    /// - [`StackError::DuplicateSource`] if `source` is already stacked. The
    ///   factory is not called.
    /// - [`StackError::ConstructionFailed`] if the factory returns `None`.
    pub fn try_add_popup<C, F>(
        &mut self,
        factory: F,
        container: &C,
        source: S,
    ) -> Result<(), StackError>
    where
        C: ?Sized,
        F: FnOnce(&C, &S) -> Option<V>,
    {
        if self.contains(&source) {
            return Err(StackError::duplicate_source(&source));
        }
        let Some(view) = factory(container, &source) else {
            return Err(StackError::construction_failed(&source));
        };

        tracing::debug!(source = ?source, view = ?view, "popup added");
        self.popups.push(PopupEntry { source, view });
        self.log_stack();
        Ok(())
    }

    /// Close and destroy the popup showing `source`.
    ///
    /// Returns the number of popups left. An unknown source leaves the stack
    /// untouched and returns its current size.
    pub fn remove_popup(&mut self, source: &S) -> usize {
        match self.try_remove_popup(source) {
            Ok(remaining) => remaining,
            Err(err) => {
                tracing::warn!(%err, "popup not removed");
                self.popups.len()
            }
        }
    }

    /// Close and destroy the popup showing `source`, returning the number
    /// of popups left.
    ///
    /// The first matching entry from the bottom is removed. Its source is
    /// asked to close and its view is destroyed.
    ///
    /// # Errors
    ///
    /// [`StackError::HandleNotFound`] if no entry shows `source`.
    pub fn try_remove_popup(&mut self, source: &S) -> Result<usize, StackError> {
        let Some(index) = self.popups.iter().position(|entry| entry.source == *source) else {
            return Err(StackError::not_found(source, None));
        };

        let PopupEntry { source, view } = self.popups.remove(index);
        tracing::debug!(source = ?source, view = ?view, "popup removed");
        source.close();
        view.destroy();

        self.log_stack();
        Ok(self.popups.len())
    }

    /// Give focus to the top popup's view. No-op on an empty stack.
    pub fn give_focus(&self) {
        if let Some(top) = self.popups.last() {
            tracing::debug!(view = ?top.view, "giving focus to popup");
            top.view.set_focused(true);
        }
    }

    /// Ask every popup source to close, top to bottom.
    ///
    /// Entries are not removed here. Each source's close completion is
    /// expected to call [`Self::remove_popup`].
    pub fn close_all_popups(&self) {
        tracing::debug!(count = self.popups.len(), "closing all popups");
        for entry in self.popups.iter().rev() {
            entry.source.close();
        }
    }

    fn log_stack(&self) {
        if self.config.log_stack {
            tracing::debug!(popups = %self, "popup stack updated");
        }
    }
}

impl<S: fmt::Debug, V: fmt::Debug> fmt::Display for PopupStack<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "popups ({}) ", self.popups.len())?;
        for (i, entry) in self.popups.iter().enumerate() {
            write!(f, "#{i}: {:?} [{:?}]; ", entry.view, entry.source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Close(u32),
        Destroy(u32),
        Focus(u32, bool),
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    #[derive(Clone)]
    struct Surface {
        id: u32,
        log: CallLog,
    }

    impl PartialEq for Surface {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl fmt::Debug for Surface {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "surface-{}", self.id)
        }
    }

    impl PopupSource for Surface {
        fn close(&self) {
            self.log.borrow_mut().push(Call::Close(self.id));
        }
    }

    struct View {
        id: u32,
        log: CallLog,
    }

    impl fmt::Debug for View {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "view-{}", self.id)
        }
    }

    impl PopupView for View {
        fn set_focused(&self, focused: bool) {
            self.log.borrow_mut().push(Call::Focus(self.id, focused));
        }

        fn destroy(self) {
            self.log.borrow_mut().push(Call::Destroy(self.id));
        }
    }

    /// Stand-in for the container the host parents views to.
    struct Layer;

    fn build(_: &Layer, source: &Surface) -> Option<View> {
        Some(View {
            id: source.id,
            log: Rc::clone(&source.log),
        })
    }

    fn surface(log: &CallLog, id: u32) -> Surface {
        Surface {
            id,
            log: Rc::clone(log),
        }
    }

    fn stack_of(log: &CallLog, ids: &[u32]) -> PopupStack<Surface, View> {
        let mut stack = PopupStack::new();
        for &id in ids {
            assert!(stack.add_popup(build, &Layer, surface(log, id)));
        }
        stack
    }

    #[test]
    fn empty_stack() {
        let stack: PopupStack<Surface, View> = PopupStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.current_popup_source().is_none());
        assert!(stack.top().is_none());
    }

    #[test]
    fn add_pushes_on_top() {
        let log = CallLog::default();
        let stack = stack_of(&log, &[1, 2]);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current_popup_source().map(|s| s.id), Some(2));
        assert_eq!(stack.top().map(|e| e.view().id), Some(2));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn factory_receives_container_and_source() {
        let log = CallLog::default();
        let mut stack = PopupStack::new();
        let seen = RefCell::new(None);
        let added = stack.add_popup(
            |container: &str, source: &Surface| {
                *seen.borrow_mut() = Some((container.to_owned(), source.id));
                Some(View {
                    id: source.id,
                    log: Rc::clone(&source.log),
                })
            },
            "popup-layer",
            surface(&log, 9),
        );
        assert!(added);
        assert_eq!(*seen.borrow(), Some(("popup-layer".to_owned(), 9)));
    }

    #[test]
    fn failed_construction_leaves_stack_unchanged() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1]);

        let added = stack.add_popup(|_: &Layer, _: &Surface| None, &Layer, surface(&log, 2));
        assert!(!added);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current_popup_source().map(|s| s.id), Some(1));

        let err = stack
            .try_add_popup(|_: &Layer, _: &Surface| None, &Layer, surface(&log, 2))
            .unwrap_err();
        assert!(matches!(err, StackError::ConstructionFailed { .. }));
    }

    #[test]
    fn duplicate_source_is_refused_before_construction() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1]);
        let mut called = false;

        let err = stack
            .try_add_popup(
                |layer: &Layer, source: &Surface| {
                    called = true;
                    build(layer, source)
                },
                &Layer,
                surface(&log, 1),
            )
            .unwrap_err();
        assert!(matches!(err, StackError::DuplicateSource { .. }));
        assert!(!called);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn remove_closes_and_destroys() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1, 2, 3]);

        let remaining = stack.remove_popup(&surface(&log, 2));
        assert_eq!(remaining, 2);
        assert_eq!(*log.borrow(), vec![Call::Close(2), Call::Destroy(2)]);
        assert!(!stack.contains(&surface(&log, 2)));
        assert_eq!(stack.current_popup_source().map(|s| s.id), Some(3));
    }

    #[test]
    fn remove_top_exposes_previous() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1, 2]);
        assert_eq!(stack.remove_popup(&surface(&log, 2)), 1);
        assert_eq!(stack.current_popup_source().map(|s| s.id), Some(1));
        assert_eq!(stack.remove_popup(&surface(&log, 1)), 0);
        assert!(stack.current_popup_source().is_none());
    }

    #[test]
    fn remove_unknown_source_is_a_no_op() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1, 2]);

        assert_eq!(stack.remove_popup(&surface(&log, 7)), 2);
        assert!(log.borrow().is_empty());

        let err = stack.try_remove_popup(&surface(&log, 7)).unwrap_err();
        assert_eq!(
            err,
            StackError::HandleNotFound {
                handle: "surface-7".into(),
                layer: None
            }
        );
    }

    #[test]
    fn remove_on_empty_stack_returns_zero() {
        let log = CallLog::default();
        let mut stack: PopupStack<Surface, View> = PopupStack::new();
        assert_eq!(stack.remove_popup(&surface(&log, 1)), 0);
    }

    #[test]
    fn give_focus_targets_top_view_only() {
        let log = CallLog::default();
        let stack = stack_of(&log, &[1, 2, 3]);
        stack.give_focus();
        assert_eq!(*log.borrow(), vec![Call::Focus(3, true)]);
    }

    #[test]
    fn give_focus_on_empty_stack() {
        let stack: PopupStack<Surface, View> = PopupStack::new();
        stack.give_focus();
        assert!(stack.is_empty());
    }

    #[test]
    fn close_all_is_top_to_bottom_and_keeps_entries() {
        let log = CallLog::default();
        let stack = stack_of(&log, &[1, 2, 3]);

        stack.close_all_popups();
        assert_eq!(
            *log.borrow(),
            vec![Call::Close(3), Call::Close(2), Call::Close(1)]
        );
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn close_all_then_remove_each_drains() {
        let log = CallLog::default();
        let mut stack = stack_of(&log, &[1, 2]);
        stack.close_all_popups();

        let sources: Vec<Surface> = stack.iter().rev().map(|e| e.source().clone()).collect();
        for source in &sources {
            stack.remove_popup(source);
        }
        assert!(stack.is_empty());
        let destroyed = log
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Destroy(_)))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn display_lists_entries() {
        let log = CallLog::default();
        let stack = stack_of(&log, &[4, 5]);
        assert_eq!(
            stack.to_string(),
            "popups (2) #0: view-4 [surface-4]; #1: view-5 [surface-5]; "
        );
    }
}
