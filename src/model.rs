//! Sample types produced by the collectors and consumed by the views.

/// One latency probe result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LatencySample {
    /// Round-trip time in milliseconds.
    Reply(f64),
    /// No reply within the timeout, or the probe itself failed.
    #[default]
    Dropped,
}

impl LatencySample {
    pub fn is_dropped(&self) -> bool {
        matches!(self, LatencySample::Dropped)
    }

    pub fn millis(&self) -> Option<f64> {
        match self {
            LatencySample::Reply(ms) => Some(*ms),
            LatencySample::Dropped => None,
        }
    }
}

impl From<Option<f64>> for LatencySample {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(ms) => LatencySample::Reply(ms),
            None => LatencySample::Dropped,
        }
    }
}

/// Cumulative block device byte counters at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IoCounters {
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Per-tick host vitals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VitalsSnapshot {
    /// CPU utilization since the previous read, 0..=100.
    pub cpu_percent: f64,
    /// Memory in use, 0..=100.
    pub mem_percent: f64,
    /// Bytes per second read since the previous read.
    pub read_rate: f64,
    /// Bytes per second written since the previous read.
    pub write_rate: f64,
}

impl VitalsSnapshot {
    /// Combined read + write throughput.
    pub fn io_rate(&self) -> f64 {
        self.read_rate + self.write_rate
    }
}

/// Derives read/write rates from two counter snapshots `elapsed_secs` apart.
///
/// Missing counters or a non-positive interval yield zero rates. Counters that
/// went backwards (device removed, wrap) also yield zero for that direction.
pub fn io_rates(
    prev: Option<IoCounters>,
    cur: Option<IoCounters>,
    elapsed_secs: f64,
) -> (f64, f64) {
    match (prev, cur) {
        (Some(prev), Some(cur)) if elapsed_secs > 0.0 => {
            let read = cur.read_bytes.saturating_sub(prev.read_bytes) as f64 / elapsed_secs;
            let write = cur.write_bytes.saturating_sub(prev.write_bytes) as f64 / elapsed_secs;
            (read, write)
        }
        _ => (0.0, 0.0),
    }
}
