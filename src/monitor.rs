//! The sampling loop: one probe, one vitals read and one redraw per tick,
//! held to a fixed cadence.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::collector::{Pinger, VitalsSource};
use crate::config::Config;
use crate::session::Session;
use crate::tui::RenderSink;

/// Longest single sleep, so a stop request is noticed promptly.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Loop state. `Stopping` is terminal: entering it renders the final panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopping,
}

/// Time left in the tick after `elapsed` of work, never negative.
pub fn sleep_time(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}

/// Drives sampling and rendering until the stop flag is cleared.
pub struct Monitor<P, V, S> {
    session: Session,
    pinger: P,
    vitals: V,
    sink: S,
    interval: Duration,
    running: Arc<AtomicBool>,
    state: LoopState,
}

impl<P: Pinger, V: VitalsSource, S: RenderSink> Monitor<P, V, S> {
    /// Creates the monitor and takes the initial I/O counter baseline.
    pub fn new(config: &Config, pinger: P, mut vitals: V, sink: S) -> Self {
        let baseline = vitals.io_counters();
        Self {
            session: Session::new(config.host.clone(), baseline, Instant::now()),
            pinger,
            vitals,
            sink,
            interval: config.interval,
            running: Arc::new(AtomicBool::new(true)),
            state: LoopState::Running,
        }
    }

    /// Shares an externally owned stop flag instead of the internal one.
    pub fn with_stop_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    /// Flag that keeps the loop running; store `false` to request shutdown.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs until a stop is requested, then publishes the final panel.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            host = self.session.host(),
            interval_ms = self.interval.as_millis() as u64,
            "monitoring started"
        );
        self.sink.publish(&self.session.waiting_panel())?;

        loop {
            match self.state {
                LoopState::Running => self.state = self.tick()?,
                LoopState::Stopping => {
                    self.finish()?;
                    info!("monitoring stopped");
                    return Ok(());
                }
            }
        }
    }

    /// One acquisition/render/sleep cycle. Returns the next state.
    fn tick(&mut self) -> io::Result<LoopState> {
        if !self.is_running() {
            return Ok(LoopState::Stopping);
        }
        let started = Instant::now();

        let sample = self.pinger.ping(self.session.host());
        if !self.is_running() {
            // Interrupted while probing: leave this tick unrecorded.
            return Ok(LoopState::Stopping);
        }
        self.session.record_latency(sample);

        let vitals = self.session.record_vitals(&mut self.vitals, Instant::now());
        debug!(
            latency_ms = sample.millis(),
            cpu = vitals.cpu_percent,
            mem = vitals.mem_percent,
            io_rate = vitals.io_rate(),
            io_max = self.session.io_max(),
            "tick"
        );
        self.sink.publish(&self.session.panel(&vitals))?;

        self.sleep(sleep_time(self.interval, started.elapsed()));
        Ok(if self.is_running() {
            LoopState::Running
        } else {
            LoopState::Stopping
        })
    }

    /// Sleeps for `duration` in short slices, returning early on stop.
    fn sleep(&self, duration: Duration) {
        let mut remaining = duration;
        while remaining > Duration::ZERO && self.is_running() {
            let slice = remaining.min(SLEEP_SLICE);
            thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        let panel = self.session.final_panel(&mut self.vitals);
        self.sink.finish(&panel)
    }
}
