//! The one-line CPU / MEM / IO summary shown under the latency row.

use crate::config::VITALS_SPARK_SIZE;
use crate::fmt::{format_bytes, format_percent};
use crate::model::VitalsSnapshot;

use super::common::{StyleClass, StyledLine};
use super::sparkline::vitals_sparkline;

const DIVIDER: &str = " │ ";

/// CPU text color: >90 critical, >60 warning.
pub fn cpu_style(pct: f64) -> StyleClass {
    if pct > 90.0 {
        StyleClass::CriticalBold
    } else if pct > 60.0 {
        StyleClass::WarningBold
    } else {
        StyleClass::ActiveBold
    }
}

/// Memory text color: >90 critical, >70 warning.
pub fn mem_style(pct: f64) -> StyleClass {
    if pct > 90.0 {
        StyleClass::CriticalBold
    } else if pct > 70.0 {
        StyleClass::WarningBold
    } else {
        StyleClass::ActiveBold
    }
}

/// Builds ` CPU  12%▁▂▃ │ MEM 45% │ IO ▲200K ▼17K/s`.
///
/// The CPU sparkline is scaled by `cpu_max`, the CPU session maximum.
pub fn vitals_line(vitals: &VitalsSnapshot, cpu_history: &[f64], cpu_max: f64) -> StyledLine {
    let mut line = StyledLine::new();

    line.push(" CPU ", StyleClass::Dimmed);
    line.push(
        format_percent(vitals.cpu_percent, 3),
        cpu_style(vitals.cpu_percent),
    );
    line.append(vitals_sparkline(cpu_history, cpu_max, VITALS_SPARK_SIZE));

    line.push(DIVIDER, StyleClass::Dimmed);

    line.push("MEM ", StyleClass::Dimmed);
    line.push(
        format_percent(vitals.mem_percent, 2),
        mem_style(vitals.mem_percent),
    );

    line.push(DIVIDER, StyleClass::Dimmed);

    line.push("IO ", StyleClass::Dimmed);
    line.push(
        format!("▲{}", format_bytes(vitals.read_rate)),
        StyleClass::Accent,
    );
    line.push(
        format!(" ▼{}", format_bytes(vitals.write_rate)),
        StyleClass::Highlight,
    );
    line.push("/s", StyleClass::Dimmed);

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(cpu: f64, mem: f64, read: f64, write: f64) -> VitalsSnapshot {
        VitalsSnapshot {
            cpu_percent: cpu,
            mem_percent: mem,
            read_rate: read,
            write_rate: write,
        }
    }

    #[test]
    fn test_vitals_line_text() {
        let line = vitals_line(&snapshot(12.4, 45.0, 204_800.0, 17_408.0), &[12.4], 12.4);
        let expected = format!(
            " CPU  12%{}█ │ MEM 45% │ IO ▲200K ▼17K/s",
            " ".repeat(9)
        );
        assert_eq!(line.text(), expected);
    }

    #[test]
    fn test_vitals_line_idle_io() {
        let line = vitals_line(&snapshot(0.0, 5.0, 0.0, 0.0), &[], 10.0);
        assert!(line.text().ends_with("MEM  5% │ IO ▲0B ▼0B/s"));
    }

    #[test]
    fn test_threshold_colors() {
        assert_eq!(cpu_style(95.0), StyleClass::CriticalBold);
        assert_eq!(cpu_style(90.0), StyleClass::WarningBold);
        assert_eq!(cpu_style(61.0), StyleClass::WarningBold);
        assert_eq!(cpu_style(60.0), StyleClass::ActiveBold);

        assert_eq!(mem_style(91.0), StyleClass::CriticalBold);
        assert_eq!(mem_style(71.0), StyleClass::WarningBold);
        assert_eq!(mem_style(70.0), StyleClass::ActiveBold);
    }

    #[test]
    fn test_vitals_line_segment_styles() {
        let line = vitals_line(&snapshot(95.0, 80.0, 1.0, 1.0), &[], 10.0);
        let cpu = &line.segments[1];
        assert_eq!(cpu.text, " 95%");
        assert_eq!(cpu.style, StyleClass::CriticalBold);

        let mem = line
            .segments
            .iter()
            .find(|s| s.text == "80%")
            .unwrap();
        assert_eq!(mem.style, StyleClass::WarningBold);

        let write = line
            .segments
            .iter()
            .find(|s| s.text.starts_with(" ▼"))
            .unwrap();
        assert_eq!(write.style, StyleClass::Highlight);
    }
}
