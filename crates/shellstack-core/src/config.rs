#![forbid(unsafe_code)]

//! Configuration for the shell stacks.
//!
//! Defaults reproduce the stock shell behavior: unbounded layer numbers and
//! a chain dump logged after every focus chain mutation.
//!
//! With the `policy-config` feature, a [`ShellConfig`] can be loaded from a
//! TOML document. Every key is optional:
//!
//! ```toml
//! [focus]
//! log_chain = true
//! max_layer = 32
//!
//! [popups]
//! log_stack = false
//! ```

use std::fmt;

/// Focus chain settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "policy-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default, deny_unknown_fields))]
pub struct FocusChainConfig {
    /// Log the whole chain at `debug` level after each mutation.
    pub log_chain: bool,
    /// Highest accepted layer number. `None` accepts any layer.
    pub max_layer: Option<usize>,
}

impl Default for FocusChainConfig {
    fn default() -> Self {
        Self {
            log_chain: true,
            max_layer: None,
        }
    }
}

impl FocusChainConfig {
    /// Set chain dump logging.
    #[must_use]
    pub fn log_chain(mut self, log_chain: bool) -> Self {
        self.log_chain = log_chain;
        self
    }

    /// Bound the accepted layer numbers.
    #[must_use]
    pub fn max_layer(mut self, max_layer: usize) -> Self {
        self.max_layer = Some(max_layer);
        self
    }
}

/// Popup stack settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "policy-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default, deny_unknown_fields))]
pub struct PopupConfig {
    /// Log the popup stack at `debug` level after each add/remove.
    pub log_stack: bool,
}

impl PopupConfig {
    /// Set popup stack dump logging.
    #[must_use]
    pub fn log_stack(mut self, log_stack: bool) -> Self {
        self.log_stack = log_stack;
        self
    }
}

/// Settings for a whole shell session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "policy-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default, deny_unknown_fields))]
pub struct ShellConfig {
    pub focus: FocusChainConfig,
    pub popups: PopupConfig,
}

/// Errors from loading a [`ShellConfig`].
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid shell config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(feature = "policy-config")]
impl ShellConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed or contains
    /// unknown keys.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tracing::debug!(?config, "loaded shell config");
        Ok(config)
    }
}
