//! pingmon - live ping latency and host vitals in one terminal panel.

use std::fs::File;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use std::sync::atomic::Ordering;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pingmon::collector::{RealFs, SystemPing, VitalsCollector};
use pingmon::config::{Config, DEFAULT_HOST, parse_interval};
use pingmon::monitor::Monitor;
use pingmon::tui::TerminalSink;

/// Live ping latency and host vitals in a single terminal panel.
#[derive(Parser)]
#[command(
    name = "pingmon",
    about = "Live ping latency and host vitals in a single terminal panel"
)]
struct Args {
    /// Host to ping.
    #[arg(default_value = DEFAULT_HOST)]
    host: String,

    /// Seconds between samples (fractions allowed).
    #[arg(short, long, default_value = "1", value_parser = parse_interval)]
    interval: Duration,
}

/// Routes tracing output to `path`. The terminal belongs to the panel, so
/// without a log file nothing is installed.
fn init_logging(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("pingmon: cannot open log file {}: {e}", path.display());
            return;
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pingmon=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    let sink = TerminalSink::new()?;
    let vitals = VitalsCollector::new(RealFs::new(), &config.proc_path, &config.sys_path);
    let mut monitor = Monitor::new(config, SystemPing::new(), vitals, sink);

    let running = monitor.stop_handle();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received interrupt");
        running.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    monitor.run()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = Config::new(args.host, args.interval).with_env();

    init_logging(config.log_file.as_deref());
    info!("pingmon {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&config) {
        eprintln!("pingmon: {e:#}");
        process::exit(1);
    }
}
