//! Common types for UI-agnostic view models.
//!
//! Style classes are semantic hints that don't depend on a specific
//! rendering framework. The TUI maps them to ratatui styles; any other sink
//! (plain text, HTML) can map them however it likes.

/// Semantic style of a text segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleClass {
    #[default]
    Normal,
    /// De-emphasized labels and dividers (TUI: dark gray).
    Dimmed,
    /// Informational values (TUI: cyan).
    Accent,
    /// Secondary informational values (TUI: magenta).
    Highlight,
    /// TUI: yellow.
    Warning,
    /// TUI: yellow + bold.
    WarningBold,
    /// TUI: red.
    Critical,
    /// TUI: red + bold. Used for drops and timeouts.
    CriticalBold,
    /// Healthy state (TUI: green).
    Active,
    /// TUI: green + bold.
    ActiveBold,
    /// TUI: green, dimmed.
    ActiveDimmed,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segment {
    pub text: String,
    pub style: StyleClass,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: StyleClass) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// An ordered list of styled segments forming one display line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub segments: Vec<Segment>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: StyleClass) {
        self.segments.push(Segment::new(text, style));
    }

    pub fn append(&mut self, other: StyledLine) {
        self.segments.extend(other.segments);
    }

    /// The line's text with styles stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in cells. Every glyph this crate emits is single-width.
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_line_text_and_width() {
        let mut line = StyledLine::new();
        line.push(" CPU ", StyleClass::Dimmed);
        line.push("▁▂█", StyleClass::Accent);
        let mut tail = StyledLine::new();
        tail.push("ok", StyleClass::Active);
        line.append(tail);

        assert_eq!(line.text(), " CPU ▁▂█ok");
        assert_eq!(line.width(), 10);
        assert_eq!(line.segments.len(), 3);
        assert_eq!(line.segments[2].style, StyleClass::Active);
    }
}
