//! Latency probes through the operating system's `ping` binary.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::config::{PING_GRACE, PING_TIMEOUT_MS};
use crate::model::LatencySample;

/// How often a running `ping` child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A single round-trip probe. Implementations never fail: every problem is
/// reported as [`LatencySample::Dropped`].
pub trait Pinger {
    fn ping(&mut self, host: &str) -> LatencySample;
}

#[derive(Debug, Error)]
pub enum PingError {
    #[error("failed to spawn ping: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ping did not exit within {0:?}")]
    Timeout(Duration),
    #[error("no reply")]
    NoReply,
}

/// Runs `ping -c 1 -W <wait> <host>` once per probe.
#[derive(Debug, Clone)]
pub struct SystemPing {
    program: String,
    timeout: Duration,
    grace: Duration,
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemPing {
    pub fn new() -> Self {
        Self {
            program: "ping".to_string(),
            timeout: Duration::from_millis(PING_TIMEOUT_MS),
            grace: PING_GRACE,
        }
    }

    /// Uses a different executable, e.g. `ping6` or a test stub.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Overrides the reply wait and the extra time the process gets before
    /// it is killed.
    pub fn with_timeout(mut self, timeout: Duration, grace: Duration) -> Self {
        self.timeout = timeout;
        self.grace = grace;
        self
    }

    /// Arguments for a single probe. `-W` is seconds on Linux but
    /// milliseconds on macOS.
    pub fn args(&self, host: &str) -> Vec<String> {
        let wait = if cfg!(target_os = "macos") {
            self.timeout.as_millis().to_string()
        } else {
            self.timeout.as_secs().max(1).to_string()
        };
        vec![
            "-c".to_string(),
            "1".to_string(),
            "-W".to_string(),
            wait,
            host.to_string(),
        ]
    }

    fn run(&self, host: &str) -> Result<f64, PingError> {
        let mut child = Command::new(&self.program)
            .args(self.args(host))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(PingError::Spawn)?;

        let limit = self.timeout + self.grace;
        wait_with_deadline(&mut child, limit)?;

        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_string(&mut output)?;
        }
        parse_reply(&output).ok_or(PingError::NoReply)
    }
}

/// Waits for `child` to exit, killing it once `limit` has passed.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> Result<(), PingError> {
    let deadline = Instant::now() + limit;
    loop {
        if child.try_wait()?.is_some() {
            return Ok(());
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(PingError::Timeout(limit));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

impl Pinger for SystemPing {
    fn ping(&mut self, host: &str) -> LatencySample {
        match self.run(host) {
            Ok(ms) => LatencySample::Reply(ms),
            Err(e) => {
                debug!(host, error = %e, "ping dropped");
                LatencySample::Dropped
            }
        }
    }
}

/// Extracts the round-trip time from `ping` output.
///
/// Looks for the first `time=<number> ms` (space optional) and returns the
/// number of milliseconds. Output without such a field yields `None`.
pub fn parse_reply(output: &str) -> Option<f64> {
    output
        .match_indices("time=")
        .find_map(|(idx, m)| parse_millis(&output[idx + m.len()..]))
}

fn parse_millis(rest: &str) -> Option<f64> {
    let mut end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    if rest[end..].starts_with('.') {
        end += 1;
        end += rest[end..].bytes().take_while(u8::is_ascii_digit).count();
    }
    if !rest[end..].trim_start().starts_with("ms") {
        return None;
    }
    rest[..end].parse().ok()
}
