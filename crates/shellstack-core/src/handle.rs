#![forbid(unsafe_code)]

//! Capability traits the host implements for the handles it passes in.
//!
//! Handles are references to host-owned objects (typically `Rc`-backed items
//! or plain ids into a host table). The managers only compare, clone, and
//! call back through them; they never decide when a handle dies.
//!
//! # Identity
//!
//! Handle identity is `PartialEq`. Two handles that compare equal are the
//! same surface as far as the managers are concerned.
//!
//! # Failure Modes
//!
//! Callbacks are fire-and-forget: a host that cannot deliver focus (the item
//! is already gone, say) should simply ignore the call. The managers keep
//! their own bookkeeping consistent either way.

use std::fmt::Debug;

/// A handle that can take part in the layered focus chain.
pub trait Focusable: PartialEq + Debug {
    /// The layer this handle lives in, or `None` if the host never assigned one.
    ///
    /// The value must stay fixed while the handle is in the chain; release
    /// looks the handle up by this number.
    fn layer_number(&self) -> Option<usize>;

    /// Deliver (`true`) or drop (`false`) input focus.
    ///
    /// `true` means "become the active focus item"; the host's own
    /// single-focus rule takes focus away from whatever held it before.
    fn set_focused(&self, focused: bool);
}

/// The surface behind a popup entry.
pub trait PopupSource: PartialEq + Debug {
    /// Ask the surface to close.
    ///
    /// Closing is asynchronous from the stack's point of view; the host
    /// reports completion by calling `PopupStack::remove_popup`.
    fn close(&self);
}

/// The display wrapper the host builds for a popup source.
pub trait PopupView: Debug {
    /// Deliver or drop input focus.
    fn set_focused(&self, focused: bool);

    /// Tear the wrapper down. Called exactly once, when its entry is removed.
    fn destroy(self)
    where
        Self: Sized;
}
