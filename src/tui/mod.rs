//! Terminal output for the monitor panel.
//!
//! The sampling loop only knows about [`RenderSink`]; [`TerminalSink`] is the
//! ratatui/crossterm implementation used by the binary.

mod render;
mod sink;
mod style;

pub use render::{panel_height, panel_widget, render_panel};
pub use sink::{RenderSink, TerminalSink};
pub use style::{Styles, Theme};
