//! Text formatting helpers shared by the view composers.
//!
//! Pure functions only: no styles, no layout.

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a byte count (or byte rate) with a binary magnitude suffix.
///
/// `"0B"`, `"512B"`, `"2K"`, `"5M"`, `"2.0G"`: gigabytes keep one decimal,
/// everything below is rounded to a whole number.
pub fn format_bytes(n: f64) -> String {
    if n >= GIB {
        format!("{:.1}G", n / GIB)
    } else if n >= MIB {
        format!("{:.0}M", n / MIB)
    } else if n >= KIB {
        format!("{:.0}K", n / KIB)
    } else {
        format!("{:.0}B", n)
    }
}

/// Format a round-trip time, e.g. `"12.3ms"`.
pub fn format_latency(ms: f64) -> String {
    format!("{:.1}ms", ms)
}

/// Format a percentage as a right-aligned whole number of `width` digits.
pub fn format_percent(pct: f64, width: usize) -> String {
    format!("{:>width$.0}%", pct, width = width)
}
