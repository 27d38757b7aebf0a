#![forbid(unsafe_code)]

//! Focus bookkeeping for compositor shells.
//!
//! - [`LayeredFocusStack`]: layers of focusable handles; the top handle of
//!   the highest layer holds input focus.
//! - [`PopupStack`]: a single stack of popups; only the top popup gets focus.
//! - [`ShellStacks`]: one of each, owned by a compositor session.
//!
//! The host implements [`Focusable`], [`PopupSource`], and [`PopupView`] for
//! its handles and calls into the stacks on surface lifecycle events.
//! Nothing here renders, dispatches input, or owns a surface.
//!
//! Both stacks absorb bad input (unknown handles, missing layer numbers,
//! failed popup construction) by logging a `tracing` warning. The `try_*`
//! methods return the underlying [`StackError`] instead.

pub mod focus_chain;
pub mod popup;
pub mod session;

pub use focus_chain::LayeredFocusStack;
pub use popup::{PopupEntry, PopupStack};
pub use session::ShellStacks;

pub use shellstack_core::{
    ConfigError, DebugColor, FocusChainConfig, Focusable, PopupConfig, PopupSource, PopupView,
    ShellConfig, StackError, WindowType, debug_color,
};
