//! UI-agnostic view models.
//!
//! Composers here turn samples into [`common::StyledLine`]s and a
//! [`panel::PanelView`]. The TUI (or any other sink) maps style classes to
//! concrete colors when drawing.

pub mod common;
pub mod panel;
pub mod sparkline;
pub mod vitals;

pub use common::{Segment, StyleClass, StyledLine};
pub use panel::{PanelView, compose_panel};
pub use vitals::vitals_line;
