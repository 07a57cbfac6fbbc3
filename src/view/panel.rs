//! The bordered status panel: latency readout, sparkline, loss indicator and
//! the optional vitals line.

use crate::config::{HIGH_LATENCY_MS, HISTORY_SIZE, PANEL_WIDTH};
use crate::fmt::format_latency;
use crate::model::LatencySample;

use super::common::{StyleClass, StyledLine};
use super::sparkline::latency_sparkline;

/// Columns inside the border and the one-cell horizontal padding.
pub const INNER_WIDTH: usize = PANEL_WIDTH as usize - 4;

/// Everything a render sink needs to draw one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Monitored host, shown in the top border.
    pub title: String,
    /// At least one drop in the current window.
    pub alert: bool,
    /// Dropped samples in the current window.
    pub drops: usize,
    /// Border color: [`StyleClass::Critical`] while alerting, else [`StyleClass::Active`].
    pub border: StyleClass,
    pub width: u16,
    pub lines: Vec<StyledLine>,
}

impl PanelView {
    /// Body text with styles stripped, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trailing status phrase for `drops` losses out of `total` samples.
pub fn loss_text(drops: usize, total: usize) -> (String, StyleClass) {
    match (drops, total) {
        (_, 0) => ("waiting".to_string(), StyleClass::Dimmed),
        (0, _) => ("0% loss".to_string(), StyleClass::ActiveDimmed),
        // Trailing space keeps the singular as wide as the plural.
        (1, _) => ("1 drop! ".to_string(), StyleClass::CriticalBold),
        (n, _) => (format!("{} drops!", n), StyleClass::CriticalBold),
    }
}

/// Composes the panel for the current latency window.
///
/// The alert flag and border reflect the whole window, while the readout
/// only reflects the newest sample: a window holding one old drop shows a
/// red border next to a live latency value.
pub fn compose_panel(
    host: &str,
    history: &[LatencySample],
    vitals: Option<StyledLine>,
) -> PanelView {
    let drops = history.iter().filter(|s| s.is_dropped()).count();
    let alert = drops > 0;

    let mut row = StyledLine::new();
    if alert {
        row.push(" ⚠ ", StyleClass::WarningBold);
    } else {
        row.push(" ● ", StyleClass::ActiveBold);
    }

    match history.last() {
        Some(LatencySample::Reply(ms)) => {
            let style = if *ms > HIGH_LATENCY_MS {
                StyleClass::WarningBold
            } else {
                StyleClass::ActiveBold
            };
            row.push(format!("{:<9}", format_latency(*ms)), style);
        }
        _ => row.push("timeout  ", StyleClass::CriticalBold),
    }

    row.append(latency_sparkline(history, HISTORY_SIZE));

    row.push("   ", StyleClass::Normal);
    let (status, status_style) = loss_text(drops, history.len());
    row.push(status, status_style);

    let mut lines = vec![row];
    if let Some(vitals) = vitals {
        let mut divider = StyledLine::new();
        divider.push("─".repeat(INNER_WIDTH), StyleClass::Dimmed);
        lines.push(divider);
        lines.push(vitals);
    }

    PanelView {
        title: host.to_string(),
        alert,
        drops,
        border: if alert {
            StyleClass::Critical
        } else {
            StyleClass::Active
        },
        width: PANEL_WIDTH,
        lines,
    }
}
