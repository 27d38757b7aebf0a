#![forbid(unsafe_code)]

//! Core types shared by the shellstack focus and popup managers.
//!
//! The managers never own the surfaces they track. The host compositor hands
//! them cheap handles and implements the small capability traits in
//! [`handle`] so the managers can call back for focus delivery, popup close,
//! and popup teardown.

pub mod config;
pub mod error;
pub mod handle;
pub mod window_type;

pub use config::{ConfigError, FocusChainConfig, PopupConfig, ShellConfig};
pub use error::StackError;
pub use handle::{Focusable, PopupSource, PopupView};
pub use window_type::{DebugColor, WindowType, debug_color};
