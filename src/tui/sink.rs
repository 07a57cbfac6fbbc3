//! Render sinks: where composed panels go.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::view::PanelView;

use super::render::render_panel;

/// Rows reserved for the panel: latency row, divider, vitals line and borders.
const PANEL_ROWS: u16 = 5;

/// Accepts composed panels and displays them.
pub trait RenderSink {
    /// Shows `panel` in place of the previous one.
    fn publish(&mut self, panel: &PanelView) -> io::Result<()>;

    /// Shows the last panel and leaves it on screen.
    fn finish(&mut self, panel: &PanelView) -> io::Result<()>;
}

/// Draws panels into an inline viewport on stdout, redrawing in place.
pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSink {
    /// Clears the screen and reserves the panel area at the top.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        let terminal = Terminal::with_options(
            CrosstermBackend::new(stdout),
            TerminalOptions {
                viewport: Viewport::Inline(PANEL_ROWS),
            },
        )?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, panel: &PanelView) -> io::Result<u16> {
        let mut bottom = 0;
        self.terminal.draw(|frame| {
            let area = frame.area();
            bottom = area.bottom();
            render_panel(frame, area, panel);
        })?;
        Ok(bottom)
    }
}

impl RenderSink for TerminalSink {
    fn publish(&mut self, panel: &PanelView) -> io::Result<()> {
        self.draw(panel).map(|_| ())
    }

    fn finish(&mut self, panel: &PanelView) -> io::Result<()> {
        let bottom = self.draw(panel)?;
        self.terminal.show_cursor()?;
        self.terminal
            .set_cursor_position(Position::new(0, bottom.saturating_sub(1)))?;
        let backend = self.terminal.backend_mut();
        writeln!(backend)?;
        backend.flush()
    }
}
