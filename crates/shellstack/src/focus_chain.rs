#![forbid(unsafe_code)]

//! Layered focus chain.
//!
//! The chain is a sequence of layers indexed by layer number. Each layer is
//! an ordered list of handles, later entries above earlier ones. The
//! globally topmost handle (the last handle of the highest layer) holds
//! input focus; every mutation recomputes it and delegates focus to it.
//!
//! A handle in a higher layer shadows everything below it: a surface that
//! asks for focus in a lower layer is queued there and only gets focus once
//! the higher layers drain.
//!
//! Only occupied layers are stored. Layer numbers below the top that hold
//! nothing read back as empty placeholders, so any `usize` is a valid layer
//! number and costs nothing to address.
//!
//! # Invariants
//!
//! - Layer `n` holds exactly the handles whose layer number is `n`.
//! - No trailing empty layers: a layer is dropped as soon as it empties.
//! - A handle appears at most once in the chain.
//! - The top handle is recomputed from scratch after every mutation.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing layer number | `layer_number()` is `None` | Warn, no-op |
//! | Release of unknown handle | Never requested, or already released | Warn, no-op |
//! | Layer above `max_layer` | Bounded config, bogus layer number | Warn, no-op |
//!
//! The `try_*` operations return the same conditions as [`StackError`].
//!
//! # Example
//!
//! ```ignore
//! let mut chain = LayeredFocusStack::new();
//! chain.request_focus(home_screen);   // layer 0
//! chain.request_focus(notification);  // layer 2, takes focus
//! chain.release_focus(&notification); // focus returns to home_screen
//! ```

use std::collections::BTreeMap;
use std::fmt;

use shellstack_core::{FocusChainConfig, Focusable, StackError};

/// Ordered layers of focusable handles.
#[derive(Debug)]
pub struct LayeredFocusStack<H> {
    /// Occupied layers by layer number. Never holds an empty layer.
    layers: BTreeMap<usize, Vec<H>>,
    config: FocusChainConfig,
}

impl<H> Default for LayeredFocusStack<H> {
    fn default() -> Self {
        Self::with_config(FocusChainConfig::default())
    }
}

impl<H> LayeredFocusStack<H> {
    /// Create an empty chain with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chain with the given settings.
    #[must_use]
    pub fn with_config(config: FocusChainConfig) -> Self {
        Self {
            layers: BTreeMap::new(),
            config,
        }
    }

    /// Settings this chain was built with.
    #[must_use]
    pub fn config(&self) -> &FocusChainConfig {
        &self.config
    }

    /// The handle that currently holds focus: the last handle of the
    /// highest non-empty layer.
    #[must_use]
    pub fn top_handle(&self) -> Option<&H> {
        self.layers.values().rev().find_map(|layer| layer.last())
    }

    /// Highest occupied layer number, if any.
    #[inline]
    #[must_use]
    pub fn top_layer(&self) -> Option<usize> {
        self.layers.keys().next_back().copied()
    }

    /// Number of layers, placeholders included.
    ///
    /// Equals the highest occupied layer number plus one, or zero. Saturates
    /// at `usize::MAX` when layer `usize::MAX` is occupied.
    #[inline]
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.top_layer().map_or(0, |top| top.saturating_add(1))
    }

    /// Handles in layer `number`, bottom to top.
    ///
    /// Placeholder layers yield an empty slice; layers above the top yield `None`.
    #[must_use]
    pub fn layer(&self, number: usize) -> Option<&[H]> {
        match self.layers.get(&number) {
            Some(layer) => Some(layer.as_slice()),
            None if self.top_layer().is_some_and(|top| number < top) => Some(&[]),
            None => None,
        }
    }

    /// Total number of handles in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Check if the chain holds no handles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All handles with their layer number, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &H)> {
        self.layers
            .iter()
            .flat_map(|(&number, layer)| layer.iter().map(move |h| (number, h)))
    }
}

impl<H: Focusable> LayeredFocusStack<H> {
    /// Whether `handle` is somewhere in the chain.
    #[must_use]
    pub fn contains(&self, handle: &H) -> bool {
        self.layers.values().any(|layer| layer.contains(handle))
    }

    /// Push `handle` into its layer and give focus to the top handle.
    ///
    /// Failures are logged and ignored; see [`Self::try_request_focus`].
    pub fn request_focus(&mut self, handle: H) {
        if let Err(err) = self.try_request_focus(handle) {
            tracing::warn!(%err, "focus request ignored");
        }
    }

    /// Push `handle` into its layer and give focus to the top handle.
    ///
    /// Pushing a handle that is already in its layer does not move it, but
    /// focus is still handed to the top handle.
    ///
    /// # Errors
    ///
    /// - [`StackError::MissingLayerAssignment`] if the handle has no layer number.
    /// - [`StackError::LayerOutOfRange`] if the layer number exceeds `max_layer`.
    pub fn try_request_focus(&mut self, handle: H) -> Result<(), StackError> {
        let Some(number) = handle.layer_number() else {
            return Err(StackError::missing_layer(&handle));
        };
        if let Some(max) = self.config.max_layer
            && number > max
        {
            return Err(StackError::LayerOutOfRange { layer: number, max });
        }
        tracing::debug!(layer = number, item = ?handle, "focus requested");

        let layer = self.layers.entry(number).or_default();
        if !layer.contains(&handle) {
            tracing::debug!(layer = number, item = ?handle, "item pushed into focus chain");
            layer.push(handle);
        }

        self.focus_top();
        Ok(())
    }

    /// Remove `handle` from its layer, unfocus it, and give focus to the new
    /// top handle.
    ///
    /// Failures are logged and ignored; see [`Self::try_release_focus`].
    pub fn release_focus(&mut self, handle: &H) {
        if let Err(err) = self.try_release_focus(handle) {
            tracing::warn!(%err, "focus release ignored");
        }
    }

    /// Remove `handle` from its layer, unfocus it, and give focus to the new
    /// top handle.
    ///
    /// The last occurrence in the layer is removed. A layer that empties is
    /// dropped, which prunes the tail when it was the top layer.
    ///
    /// # Errors
    ///
    /// - [`StackError::MissingLayerAssignment`] if the handle has no layer number.
    /// - [`StackError::HandleNotFound`] if the handle is not in its layer.
    pub fn try_release_focus(&mut self, handle: &H) -> Result<(), StackError> {
        let Some(number) = handle.layer_number() else {
            return Err(StackError::missing_layer(handle));
        };
        tracing::debug!(layer = number, item = ?handle, "focus released");

        if self.top_layer().is_none_or(|top| number > top) {
            return Err(StackError::not_found(handle, None));
        }
        let Some(layer) = self.layers.get_mut(&number) else {
            return Err(StackError::not_found(handle, Some(number)));
        };
        let Some(index) = layer.iter().rposition(|h| h == handle) else {
            return Err(StackError::not_found(handle, Some(number)));
        };

        let removed = layer.remove(index);
        if layer.is_empty() {
            self.layers.remove(&number);
        }
        removed.set_focused(false);

        self.focus_top();
        Ok(())
    }

    fn focus_top(&self) {
        if let Some(top) = self.top_handle() {
            tracing::trace!(item = ?top, "giving focus to top item");
            top.set_focused(true);
        }
        if self.config.log_chain {
            tracing::debug!(chain = %self, "focus chain updated");
        }
    }
}

/// Dumps occupied layers only; gaps are implied by the layer numbers.
impl<H: fmt::Debug> fmt::Display for LayeredFocusStack<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "focus chain ({}) ", self.layer_count())?;
        for (number, layer) in &self.layers {
            write!(f, "#{number}: {layer:?}; ")?;
        }
        Ok(())
    }
}
