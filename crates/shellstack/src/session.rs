#![forbid(unsafe_code)]

//! Per-session owner for the focus chain and the popup stack.

use shellstack_core::ShellConfig;

use crate::focus_chain::LayeredFocusStack;
use crate::popup::PopupStack;

/// The focus chain and popup stack of one compositor session.
///
/// Build it once at startup and pass it by reference to whatever handles
/// surface lifecycle events. The two stacks are independent; this type only
/// gives them a common owner and configuration.
#[derive(Debug)]
pub struct ShellStacks<H, S, V> {
    focus: LayeredFocusStack<H>,
    popups: PopupStack<S, V>,
    config: ShellConfig,
}

impl<H, S, V> Default for ShellStacks<H, S, V> {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl<H, S, V> ShellStacks<H, S, V> {
    /// Create empty stacks configured by `config`.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        tracing::debug!(?config, "shell stacks created");
        Self {
            focus: LayeredFocusStack::with_config(config.focus),
            popups: PopupStack::with_config(config.popups),
            config,
        }
    }

    /// Settings both stacks were built from.
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The layered focus chain.
    #[inline]
    pub fn focus(&self) -> &LayeredFocusStack<H> {
        &self.focus
    }

    /// Mutable access to the focus chain.
    #[inline]
    pub fn focus_mut(&mut self) -> &mut LayeredFocusStack<H> {
        &mut self.focus
    }

    /// The popup stack.
    #[inline]
    pub fn popups(&self) -> &PopupStack<S, V> {
        &self.popups
    }

    /// Mutable access to the popup stack.
    #[inline]
    pub fn popups_mut(&mut self) -> &mut PopupStack<S, V> {
        &mut self.popups
    }

    /// Borrow both stacks mutably at once.
    pub fn split_mut(&mut self) -> (&mut LayeredFocusStack<H>, &mut PopupStack<S, V>) {
        (&mut self.focus, &mut self.popups)
    }
}
