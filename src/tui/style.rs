//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::StyleClass;

/// Terminal color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::Reset;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const ACCENT: Color = Color::Cyan;
    pub const HIGHLIGHT: Color = Color::Magenta;
    pub const OK: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Critical value style (red).
    pub fn critical() -> Style {
        Style::default().fg(Theme::CRITICAL)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    pub fn ok() -> Style {
        Style::default().fg(Theme::OK)
    }

    /// Maps a UI-agnostic [`StyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: StyleClass) -> Style {
        match class {
            StyleClass::Normal => Self::default(),
            StyleClass::Dimmed => Self::dim(),
            StyleClass::Accent => Style::default().fg(Theme::ACCENT),
            StyleClass::Highlight => Style::default().fg(Theme::HIGHLIGHT),
            StyleClass::Warning => Self::warning(),
            StyleClass::WarningBold => Self::warning().add_modifier(Modifier::BOLD),
            StyleClass::Critical => Self::critical(),
            StyleClass::CriticalBold => Self::critical().add_modifier(Modifier::BOLD),
            StyleClass::Active => Self::ok(),
            StyleClass::ActiveBold => Self::ok().add_modifier(Modifier::BOLD),
            StyleClass::ActiveDimmed => Self::ok().add_modifier(Modifier::DIM),
        }
    }
}
