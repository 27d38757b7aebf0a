#![forbid(unsafe_code)]

//! Error taxonomy for the focus chain and popup stack.
//!
//! None of these are fatal. The plain manager operations log them at `warn`
//! level and carry on; the `try_*` variants hand them back to the caller.
//!
//! # Failure Modes
//!
//! | Error | Cause | Behavior of the plain operation |
//! |-------|-------|---------------------------------|
//! | `MissingLayerAssignment` | Handle has no layer number | No-op |
//! | `HandleNotFound` | Release/remove of an absent handle | No-op |
//! | `ConstructionFailed` | Popup factory returned nothing | Returns `false` |
//! | `DuplicateSource` | Popup source already stacked | Returns `false` |
//! | `LayerOutOfRange` | Layer number above the configured bound | No-op |

use std::fmt;

/// Errors from focus chain and popup stack operations.
///
/// Handles are captured by their `Debug` rendering so the error stays
/// independent of the handle type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// The handle was never assigned a layer number.
    MissingLayerAssignment { handle: String },
    /// The handle is not where its layer number says it should be.
    ///
    /// `layer` is `None` when the handle has no layer at all in the chain, or
    /// when the lookup was not layer-based (popup sources).
    HandleNotFound { handle: String, layer: Option<usize> },
    /// The popup factory did not produce a view.
    ConstructionFailed { source: String },
    /// The popup source already has an entry in the stack.
    DuplicateSource { source: String },
    /// The layer number exceeds the configured maximum.
    LayerOutOfRange { layer: usize, max: usize },
}

impl StackError {
    pub(crate) fn describe(handle: &impl fmt::Debug) -> String {
        format!("{handle:?}")
    }

    /// Build a [`StackError::MissingLayerAssignment`] for `handle`.
    pub fn missing_layer(handle: &impl fmt::Debug) -> Self {
        Self::MissingLayerAssignment {
            handle: Self::describe(handle),
        }
    }

    /// Build a [`StackError::HandleNotFound`] for `handle`.
    pub fn not_found(handle: &impl fmt::Debug, layer: Option<usize>) -> Self {
        Self::HandleNotFound {
            handle: Self::describe(handle),
            layer,
        }
    }

    /// Build a [`StackError::ConstructionFailed`] for `source`.
    pub fn construction_failed(source: &impl fmt::Debug) -> Self {
        Self::ConstructionFailed {
            source: Self::describe(source),
        }
    }

    /// Build a [`StackError::DuplicateSource`] for `source`.
    pub fn duplicate_source(source: &impl fmt::Debug) -> Self {
        Self::DuplicateSource {
            source: Self::describe(source),
        }
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayerAssignment { handle } => {
                write!(f, "layer number of item was not assigned: {handle}")
            }
            Self::HandleNotFound {
                handle,
                layer: Some(layer),
            } => write!(f, "item {handle} is not in layer #{layer}"),
            Self::HandleNotFound {
                handle,
                layer: None,
            } => write!(f, "item {handle} is not in the stack"),
            Self::ConstructionFailed { source } => {
                write!(f, "failed to construct popup view for {source}")
            }
            Self::DuplicateSource { source } => {
                write!(f, "popup source {source} is already stacked")
            }
            Self::LayerOutOfRange { layer, max } => {
                write!(f, "layer #{layer} exceeds the maximum layer #{max}")
            }
        }
    }
}

impl std::error::Error for StackError {}
