//! Sparkline quantization and coloring.
//!
//! Values map onto a nine-step ramp, `idx = min(floor(v / max * 8), 8)`.
//! Latency scales against the largest reply in the current window; CPU and
//! I/O scale against a session-wide maximum so colors stay comparable
//! between frames.

use crate::config::HIGH_LATENCY_MS;
use crate::model::LatencySample;

use super::common::{StyleClass, StyledLine};

/// Intensity ramp, blank through full block.
pub const SPARK_CHARS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Glyph for a dropped probe; deliberately not part of the ramp.
pub const DROP_CHAR: char = '░';
/// Lower bound for the latency scale so quiet links don't look saturated.
pub const MIN_LATENCY_SCALE: f64 = 5.0;

/// Ramp index for `value` on a `0..=max_val` scale, clamped to `0..=8`.
pub fn spark_level(value: f64, max_val: f64) -> usize {
    if max_val <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate: negatives and NaN land on 0.
    ((value / max_val * 8.0) as usize).min(SPARK_CHARS.len() - 1)
}

/// Left-pads `line` with blanks so it fills `width` cells.
fn pad_to(width: usize, glyphs: usize, body: StyledLine) -> StyledLine {
    let mut line = StyledLine::new();
    let pad = width.saturating_sub(glyphs);
    if pad > 0 {
        line.push(" ".repeat(pad), StyleClass::Normal);
    }
    line.append(body);
    line
}

/// Renders the latency window, scaled by its largest reply (at least 5 ms).
///
/// Replies above [`HIGH_LATENCY_MS`] are drawn in the warning color, drops as
/// [`DROP_CHAR`] in the alert color.
pub fn latency_sparkline(samples: &[LatencySample], width: usize) -> StyledLine {
    let window = &samples[samples.len().saturating_sub(width)..];
    let max_val = window
        .iter()
        .filter_map(LatencySample::millis)
        .fold(MIN_LATENCY_SCALE, f64::max);

    let mut body = StyledLine::new();
    for sample in window {
        match sample {
            LatencySample::Dropped => body.push(DROP_CHAR.to_string(), StyleClass::CriticalBold),
            LatencySample::Reply(ms) => {
                let glyph = SPARK_CHARS[spark_level(*ms, max_val)];
                let style = if *ms > HIGH_LATENCY_MS {
                    StyleClass::Warning
                } else {
                    StyleClass::Accent
                };
                body.push(glyph.to_string(), style);
            }
        }
    }
    pad_to(width, window.len(), body)
}

/// Color for a vitals sample relative to its baseline.
pub fn ratio_style(ratio: f64) -> StyleClass {
    if ratio > 0.8 {
        StyleClass::Critical
    } else if ratio > 0.6 {
        StyleClass::Warning
    } else {
        StyleClass::Accent
    }
}

/// Renders a CPU or I/O history against its session maximum (at least 1.0).
pub fn vitals_sparkline(values: &[f64], session_max: f64, width: usize) -> StyledLine {
    let window = &values[values.len().saturating_sub(width)..];
    let max_val = session_max.max(1.0);

    let mut body = StyledLine::new();
    for &v in window {
        let glyph = SPARK_CHARS[spark_level(v, max_val)];
        body.push(glyph.to_string(), ratio_style(v / max_val));
    }
    pad_to(width, window.len(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn glyphs(line: &StyledLine) -> String {
        line.text()
    }

    #[test]
    fn test_spark_level_bounds() {
        assert_eq!(spark_level(0.0, 10.0), 0);
        assert_eq!(spark_level(10.0, 10.0), 8);
        assert_eq!(spark_level(500.0, 10.0), 8);
        assert_eq!(spark_level(5.0, 10.0), 4);
        assert_eq!(spark_level(-3.0, 10.0), 0);
        assert_eq!(spark_level(f64::NAN, 10.0), 0);
        assert_eq!(spark_level(3.0, 0.0), 0);
    }

    #[test]
    fn test_latency_sparkline_steady_replies() {
        let samples = vec![LatencySample::Reply(20.0); 5];
        let line = latency_sparkline(&samples, 30);

        assert_eq!(line.width(), 30);
        assert_eq!(glyphs(&line), format!("{}{}", " ".repeat(25), "█████"));
        assert_eq!(line.segments[0].text, " ".repeat(25));
        assert!(line.segments[1..]
            .iter()
            .all(|s| s.style == StyleClass::Accent));
    }

    #[test]
    fn test_latency_sparkline_local_scale_and_colors() {
        let samples = [
            LatencySample::Reply(2.0),
            LatencySample::Reply(200.0),
            LatencySample::Dropped,
            LatencySample::Reply(100.0),
        ];
        let line = latency_sparkline(&samples, 4);

        assert_eq!(glyphs(&line), " █░▄");
        let styles: Vec<StyleClass> = line.segments.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                StyleClass::Accent,
                StyleClass::Warning,
                StyleClass::CriticalBold,
                StyleClass::Accent,
            ]
        );
    }

    #[test]
    fn test_latency_sparkline_quiet_link_uses_floor() {
        // 2.5ms on a 5ms floor is half height.
        let line = latency_sparkline(&[LatencySample::Reply(2.5)], 1);
        assert_eq!(glyphs(&line), "▄");
    }

    #[test]
    fn test_latency_sparkline_all_dropped() {
        let line = latency_sparkline(&[LatencySample::Dropped; 3], 5);
        assert_eq!(glyphs(&line), "  ░░░");
    }

    #[test]
    fn test_vitals_sparkline_ratio_colors() {
        let line = vitals_sparkline(&[10.0, 65.0, 90.0, 100.0], 100.0, 10);
        assert_eq!(line.width(), 10);
        assert_eq!(glyphs(&line), format!("{}▅▇█", " ".repeat(7)));
        let styles: Vec<StyleClass> = line.segments[1..].iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                StyleClass::Accent,
                StyleClass::Warning,
                StyleClass::Critical,
                StyleClass::Critical,
            ]
        );
    }

    #[test]
    fn test_vitals_sparkline_tiny_session_max() {
        // A baseline below 1.0 is lifted to 1.0.
        let line = vitals_sparkline(&[0.5], 0.1, 1);
        assert_eq!(glyphs(&line), "▄");
    }

    #[test]
    fn test_empty_sparklines_are_blank() {
        assert_eq!(glyphs(&latency_sparkline(&[], 30)), " ".repeat(30));
        assert_eq!(glyphs(&vitals_sparkline(&[], 10.0, 10)), " ".repeat(10));
    }

    proptest! {
        #[test]
        fn prop_spark_level_monotonic(a in 0.0f64..1e6, b in 0.0f64..1e6, max in 0.001f64..1e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(spark_level(lo, max) <= spark_level(hi, max));
            prop_assert!(spark_level(hi, max) <= 8);
        }

        #[test]
        fn prop_latency_sparkline_fixed_width(
            samples in proptest::collection::vec(proptest::option::of(0.0f64..5000.0), 0..=30)
        ) {
            let samples: Vec<LatencySample> = samples.into_iter().map(LatencySample::from).collect();
            prop_assert_eq!(latency_sparkline(&samples, 30).width(), 30);
        }

        #[test]
        fn prop_vitals_sparkline_fixed_width(
            values in proptest::collection::vec(0.0f64..1e9, 0..=10),
            session_max in 0.0f64..1e9,
        ) {
            prop_assert_eq!(vitals_sparkline(&values, session_max, 10).width(), 10);
        }
    }
}
