//! pingmon - a single-panel terminal monitor for network latency and host vitals.
//!
//! Each tick sends one ICMP echo, samples CPU, memory and disk I/O from procfs,
//! and redraws a fixed-width panel in place:
//! - `collector` - ping probe and procfs vitals behind mockable seams
//! - `session` - rolling histories and session maxima
//! - `view` - UI-agnostic panel composition
//! - `tui` - ratatui rendering of the composed panel
//! - `monitor` - the sampling loop

pub mod collector;
pub mod config;
pub mod fmt;
pub mod history;
pub mod model;
pub mod monitor;
pub mod session;
pub mod tui;
pub mod view;
