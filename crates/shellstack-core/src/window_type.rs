#![forbid(unsafe_code)]

//! Surface window types and the debug color coding used by overlay tooling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Window type a surface declares to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowType {
    Card,
    SystemUi,
    Overlay,
    Popup,
    Restricted,
    /// Any type string the shell does not know about.
    Other(String),
}

impl WindowType {
    /// The protocol string for this window type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Card => "_WEBOS_WINDOW_TYPE_CARD",
            Self::SystemUi => "_WEBOS_WINDOW_TYPE_SYSTEM_UI",
            Self::Overlay => "_WEBOS_WINDOW_TYPE_OVERLAY",
            Self::Popup => "_WEBOS_WINDOW_TYPE_POPUP",
            Self::Restricted => "_WEBOS_WINDOW_TYPE_RESTRICTED",
            Self::Other(s) => s,
        }
    }
}

impl FromStr for WindowType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "_WEBOS_WINDOW_TYPE_CARD" => Self::Card,
            "_WEBOS_WINDOW_TYPE_SYSTEM_UI" => Self::SystemUi,
            "_WEBOS_WINDOW_TYPE_OVERLAY" => Self::Overlay,
            "_WEBOS_WINDOW_TYPE_POPUP" => Self::Popup,
            "_WEBOS_WINDOW_TYPE_RESTRICTED" => Self::Restricted,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named colors for tinting surfaces by type in debug views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugColor {
    Orchid,
    DeepPink,
    Tomato,
    Magenta,
    Purple,
    Red,
    White,
}

impl DebugColor {
    /// SVG/CSS color keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orchid => "orchid",
            Self::DeepPink => "deeppink",
            Self::Tomato => "tomato",
            Self::Magenta => "magenta",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::White => "white",
        }
    }

    /// RGB triple matching the keyword.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Orchid => (218, 112, 214),
            Self::DeepPink => (255, 20, 147),
            Self::Tomato => (255, 99, 71),
            Self::Magenta => (255, 0, 255),
            Self::Purple => (128, 0, 128),
            Self::Red => (255, 0, 0),
            Self::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for DebugColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color to tint a surface with, by window type.
///
/// `None` stands for "no surface" and maps to white.
#[must_use]
pub fn debug_color(window_type: Option<&WindowType>) -> DebugColor {
    match window_type {
        Some(WindowType::Card) => DebugColor::Orchid,
        Some(WindowType::SystemUi) => DebugColor::DeepPink,
        Some(WindowType::Overlay) => DebugColor::Tomato,
        Some(WindowType::Popup) => DebugColor::Magenta,
        Some(WindowType::Restricted) => DebugColor::Purple,
        Some(WindowType::Other(_)) => DebugColor::Red,
        None => DebugColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(s: &str) -> WindowType {
        match s.parse::<WindowType>() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }

    #[test]
    fn parses_known_types() {
        assert_eq!(parse("_WEBOS_WINDOW_TYPE_CARD"), WindowType::Card);
        assert_eq!(parse("_WEBOS_WINDOW_TYPE_SYSTEM_UI"), WindowType::SystemUi);
        assert_eq!(parse("_WEBOS_WINDOW_TYPE_OVERLAY"), WindowType::Overlay);
        assert_eq!(parse("_WEBOS_WINDOW_TYPE_POPUP"), WindowType::Popup);
        assert_eq!(
            parse("_WEBOS_WINDOW_TYPE_RESTRICTED"),
            WindowType::Restricted
        );
    }

    #[test]
    fn unknown_type_is_kept_verbatim() {
        let t = parse("_WEBOS_WINDOW_TYPE_FLOATING");
        assert_eq!(t, WindowType::Other("_WEBOS_WINDOW_TYPE_FLOATING".into()));
        assert_eq!(t.to_string(), "_WEBOS_WINDOW_TYPE_FLOATING");
    }

    #[test]
    fn color_table() {
        let cases = [
            (WindowType::Card, "orchid"),
            (WindowType::SystemUi, "deeppink"),
            (WindowType::Overlay, "tomato"),
            (WindowType::Popup, "magenta"),
            (WindowType::Restricted, "purple"),
            (WindowType::Other(String::new()), "red"),
        ];
        for (t, name) in cases {
            assert_eq!(debug_color(Some(&t)).name(), name, "{t:?}");
        }
        assert_eq!(debug_color(None), DebugColor::White);
    }

    #[test]
    fn rgb_matches_keyword() {
        assert_eq!(DebugColor::Tomato.rgb(), (255, 99, 71));
        assert_eq!(DebugColor::White.to_string(), "white");
    }

    proptest! {
        #[test]
        fn as_str_parses_back(s in "\\PC*") {
            let t = parse(&s);
            prop_assert_eq!(parse(t.as_str()), t);
        }
    }
}
