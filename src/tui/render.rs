//! Draws a [`PanelView`] as a rounded, titled ratatui block.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::view::{PanelView, StyledLine};

use super::style::Styles;

/// Rows the panel occupies: body lines plus top and bottom border.
pub fn panel_height(view: &PanelView) -> u16 {
    view.lines.len() as u16 + 2
}

fn to_line(line: &StyledLine) -> Line<'static> {
    Line::from(
        line.segments
            .iter()
            .map(|s| Span::styled(s.text.clone(), Styles::from_class(s.style)))
            .collect::<Vec<_>>(),
    )
}

/// Builds the bordered paragraph for `view`.
pub fn panel_widget(view: &PanelView) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::from_class(view.border))
        .title(view.title.clone())
        .padding(Padding::horizontal(1));

    let text = Text::from(view.lines.iter().map(to_line).collect::<Vec<_>>());
    Paragraph::new(text).block(block)
}

/// Renders `view` at the top-left of `area`, clipped to the panel size.
pub fn render_panel(frame: &mut Frame, area: Rect, view: &PanelView) {
    let area = Rect {
        width: area.width.min(view.width),
        height: area.height.min(panel_height(view)),
        ..area
    };
    frame.render_widget(panel_widget(view), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatencySample;
    use crate::view::compose_panel;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_panel_border_and_title() {
        let view = compose_panel("8.8.8.8", &[LatencySample::Reply(20.0)], None);
        let mut terminal = Terminal::new(TestBackend::new(58, 3)).unwrap();
        terminal
            .draw(|frame| render_panel(frame, frame.area(), &view))
            .unwrap();

        let top = row(&terminal, 0);
        assert!(top.starts_with("╭8.8.8.8"));
        assert!(top.ends_with('╮'));
        assert!(row(&terminal, 1).starts_with("│  ● 20.0ms"));
        assert!(row(&terminal, 2).starts_with('╰'));

        let corner = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(corner.fg, Color::Green);
    }

    #[test]
    fn test_render_alert_border_is_red() {
        let view = compose_panel("h", &[LatencySample::Dropped], None);
        let mut terminal = Terminal::new(TestBackend::new(58, 3)).unwrap();
        terminal
            .draw(|frame| render_panel(frame, frame.area(), &view))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::Red);
        assert!(row(&terminal, 1).contains("timeout"));
    }

    #[test]
    fn test_panel_height() {
        let view = compose_panel("h", &[], None);
        assert_eq!(panel_height(&view), 3);
    }
}
