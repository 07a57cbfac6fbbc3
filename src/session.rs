//! Per-run sampling state: rolling histories, session maxima and the
//! previous I/O counters needed to turn cumulative bytes into rates.

use std::time::Instant;

use crate::collector::VitalsSource;
use crate::config::{CPU_MAX_FLOOR, HISTORY_SIZE, IO_MAX_FLOOR, VITALS_SPARK_SIZE};
use crate::history::{History, SessionMax};
use crate::model::{IoCounters, LatencySample, VitalsSnapshot, io_rates};
use crate::view::{PanelView, compose_panel, vitals_line};

/// Everything that survives from one tick to the next.
///
/// Created when monitoring starts, mutated once per tick by the sampling
/// loop, dropped at exit. Only the loop thread touches it.
#[derive(Debug, Clone)]
pub struct Session {
    host: String,
    latency: History<LatencySample, HISTORY_SIZE>,
    cpu: History<f64, VITALS_SPARK_SIZE>,
    io: History<f64, VITALS_SPARK_SIZE>,
    cpu_max: SessionMax,
    io_max: SessionMax,
    prev_io: Option<IoCounters>,
    prev_io_at: Instant,
}

impl Session {
    /// Starts a session with the I/O baseline read at `now`.
    pub fn new(host: impl Into<String>, io_baseline: Option<IoCounters>, now: Instant) -> Self {
        Self {
            host: host.into(),
            latency: History::new(),
            cpu: History::new(),
            io: History::new(),
            cpu_max: SessionMax::new(CPU_MAX_FLOOR),
            io_max: SessionMax::new(IO_MAX_FLOOR),
            prev_io: io_baseline,
            prev_io_at: now,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn record_latency(&mut self, sample: LatencySample) {
        self.latency.push(sample);
    }

    /// Reads CPU, I/O and memory from `source` and appends them to the
    /// histories. I/O rates cover the time since the previous read.
    pub fn record_vitals<V: VitalsSource>(&mut self, source: &mut V, now: Instant) -> VitalsSnapshot {
        let cpu_percent = source.cpu_percent();
        self.cpu.push(cpu_percent);
        self.cpu_max.update(cpu_percent);

        let cur_io = source.io_counters();
        let elapsed = now.saturating_duration_since(self.prev_io_at).as_secs_f64();
        let (read_rate, write_rate) = io_rates(self.prev_io, cur_io, elapsed);
        self.io.push(read_rate + write_rate);
        self.io_max.update(read_rate + write_rate);
        self.prev_io = cur_io;
        self.prev_io_at = now;

        let mem_percent = source.mem_percent();

        VitalsSnapshot {
            cpu_percent,
            mem_percent,
            read_rate,
            write_rate,
        }
    }

    /// Panel for the current window without the vitals line, shown before
    /// the first tick completes.
    pub fn waiting_panel(&self) -> PanelView {
        compose_panel(&self.host, &self.latency.values(), None)
    }

    /// Panel for the current window with `vitals` underneath.
    pub fn panel(&self, vitals: &VitalsSnapshot) -> PanelView {
        let line = vitals_line(vitals, &self.cpu.values(), self.cpu_max.value());
        compose_panel(&self.host, &self.latency.values(), Some(line))
    }

    /// Shutdown panel: last observed CPU (0 before any tick), a fresh memory
    /// reading and zeroed I/O rates.
    pub fn final_panel<V: VitalsSource>(&self, source: &mut V) -> PanelView {
        let vitals = VitalsSnapshot {
            cpu_percent: self.cpu.last().unwrap_or(0.0),
            mem_percent: source.mem_percent(),
            read_rate: 0.0,
            write_rate: 0.0,
        };
        self.panel(&vitals)
    }

    pub fn latency_history(&self) -> Vec<LatencySample> {
        self.latency.values()
    }

    pub fn cpu_history(&self) -> Vec<f64> {
        self.cpu.values()
    }

    pub fn io_history(&self) -> Vec<f64> {
        self.io.values()
    }

    pub fn cpu_max(&self) -> f64 {
        self.cpu_max.value()
    }

    pub fn io_max(&self) -> f64 {
        self.io_max.value()
    }
}
