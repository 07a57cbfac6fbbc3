//! Sample acquisition: latency probes and host vitals.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │        Pinger (trait)        │   │     VitalsSource (trait)     │
//! │  SystemPing: `ping -c 1 ...` │   │  VitalsCollector             │
//! └──────────────────────────────┘   │  - /proc/stat                │
//!                                    │  - /proc/meminfo             │
//!                                    │  - /proc/diskstats           │
//!                                    └──────────────┬───────────────┘
//!                                                   │
//!                                            ┌──────▼──────┐
//!                                            │  FileSystem │ (trait)
//!                                            └──────┬──────┘
//!                                         ┌─────────┴─────────┐
//!                                  ┌──────▼──────┐     ┌──────▼──────┐
//!                                  │   RealFs    │     │   MockFs    │
//!                                  └─────────────┘     └─────────────┘
//! ```
//!
//! Both seams swallow their failures: a failed probe is a dropped sample and
//! an unreadable counter is a zero, so the sampling loop never sees an error.

pub mod mock;
pub mod ping;
pub mod procfs;
pub mod traits;

use thiserror::Error;

use crate::model::IoCounters;

pub use mock::MockFs;
pub use ping::{Pinger, SystemPing};
pub use procfs::VitalsCollector;
pub use traits::{FileSystem, RealFs};

/// Failure reading or parsing a `/proc` file.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] procfs::parser::ParseError),
}

/// Instantaneous host metrics. Reads must not block.
pub trait VitalsSource {
    /// CPU utilization since the previous call, 0..=100.
    fn cpu_percent(&mut self) -> f64;
    /// Memory in use right now, 0..=100.
    fn mem_percent(&mut self) -> f64;
    /// Cumulative disk byte counters, `None` when unavailable.
    fn io_counters(&mut self) -> Option<IoCounters>;
}
