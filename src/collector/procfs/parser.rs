//! Parsers for the three `/proc` files behind the vitals line: `stat`,
//! `meminfo` and `diskstats`.
//!
//! Each takes the file content as a string and does no I/O of its own.

use thiserror::Error;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Aggregate CPU time counters (in clock ticks) from the `cpu` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuStat {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuStat {
    /// Total elapsed ticks. The trailing guest columns are already counted in
    /// user/nice and are not read.
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }

    /// Ticks spent doing work: everything except idle and iowait.
    pub fn busy(&self) -> u64 {
        self.total()
            .saturating_sub(self.idle)
            .saturating_sub(self.iowait)
    }
}

/// Parses the aggregate `cpu` line of `/proc/stat`.
pub fn parse_cpu_stat(content: &str) -> Result<CpuStat, ParseError> {
    let line = content
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cpu"))
        .ok_or_else(|| ParseError::new("missing aggregate cpu line"))?;

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return Err(ParseError::new(format!("short cpu line: {:?}", line)));
    }
    let get_val = |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };

    Ok(CpuStat {
        user: get_val(1),
        nice: get_val(2),
        system: get_val(3),
        idle: get_val(4),
        iowait: get_val(5),
        irq: get_val(6),
        softirq: get_val(7),
        steal: get_val(8),
    })
}

/// Parsed data from `/proc/meminfo` (values in kB).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    /// Absent on kernels older than 3.14.
    pub mem_available: Option<u64>,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Percentage of memory in use, 0..=100.
    pub fn used_percent(&self) -> f64 {
        if self.mem_total == 0 {
            return 0.0;
        }
        let available = self
            .mem_available
            .unwrap_or(self.mem_free + self.buffers + self.cached)
            .min(self.mem_total);
        (self.mem_total - available) as f64 / self.mem_total as f64 * 100.0
    }
}

/// Parses `/proc/meminfo` content.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut seen_total = false;

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
            seen_total = true;
        } else if line.starts_with("MemFree:") {
            info.mem_free = parse_kb(line);
        } else if line.starts_with("MemAvailable:") {
            info.mem_available = Some(parse_kb(line));
        } else if line.starts_with("Buffers:") {
            info.buffers = parse_kb(line);
        } else if line.starts_with("Cached:") {
            info.cached = parse_kb(line);
        }
    }

    if !seen_total {
        return Err(ParseError::new("missing MemTotal"));
    }
    Ok(info)
}

/// Sector counters for one block device from `/proc/diskstats`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskStats {
    /// Device name (sda, nvme0n1, etc.)
    pub device: String,
    /// Number of sectors read (always 512-byte units).
    pub read_sectors: u64,
    /// Number of sectors written.
    pub write_sectors: u64,
}

/// Parses `/proc/diskstats` content.
///
/// Format: major minor name reads r_merged r_sectors r_time writes w_merged w_sectors w_time io_pending io_time w_io_time [discards ...]
///
/// Lines with fewer than 14 columns are skipped, so this never fails.
pub fn parse_diskstats(content: &str) -> Vec<DiskStats> {
    let mut disks = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 14 {
            continue; // Skip malformed lines
        }

        let get_val =
            |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };

        disks.push(DiskStats {
            device: parts[2].to_string(),
            read_sectors: get_val(5),
            write_sectors: get_val(9),
        });
    }

    disks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpu_stat() {
        let content = "\
cpu  10000 500 3000 80000 1000 200 100 50 7 3
cpu0 2500 125 750 20000 250 50 25 0 0 0
ctxt 500000
";
        let cpu = parse_cpu_stat(content).unwrap();
        assert_eq!(cpu.user, 10000);
        assert_eq!(cpu.idle, 80000);
        assert_eq!(cpu.steal, 50);
        assert_eq!(cpu.total(), 94850);
        assert_eq!(cpu.busy(), 13850);
    }

    #[test]
    fn test_parse_cpu_stat_ignores_guest_columns() {
        let with_guest = parse_cpu_stat("cpu 10 20 30 40 0 0 0 0 900 900\n").unwrap();
        let without = parse_cpu_stat("cpu 10 20 30 40 0 0 0 0\n").unwrap();
        assert_eq!(with_guest, without);
        assert_eq!(with_guest.total(), 100);
    }

    #[test]
    fn test_parse_cpu_stat_old_kernel() {
        // Pre-2.6 kernels only report four columns.
        let cpu = parse_cpu_stat("cpu 10 20 30 40\n").unwrap();
        assert_eq!(cpu.total(), 100);
        assert_eq!(cpu.busy(), 60);
    }

    #[test]
    fn test_parse_cpu_stat_missing() {
        assert!(parse_cpu_stat("cpu0 1 2 3 4\nctxt 5\n").is_err());
        assert!(parse_cpu_stat("cpu 1 2\n").is_err());
        assert!(parse_cpu_stat("").is_err());
    }

    #[test]
    fn test_parse_meminfo() {
        let content = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12288000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
";
        let info = parse_meminfo(content).unwrap();
        assert_eq!(info.mem_total, 16384000);
        assert_eq!(info.mem_available, Some(12288000));
        assert_eq!(info.cached, 2048000);
        assert!((info.used_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_meminfo_without_available() {
        let info = MemInfo {
            mem_total: 1000,
            mem_free: 100,
            mem_available: None,
            buffers: 50,
            cached: 50,
        };
        assert!((info.used_percent() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_meminfo_zero_total() {
        assert_eq!(MemInfo::default().used_percent(), 0.0);
        assert!(parse_meminfo("MemFree: 10 kB\n").is_err());
    }

    #[test]
    fn test_parse_diskstats() {
        let content = "\
   8       0 sda 12345 100 987654 5000 6789 50 456789 3000 0 4000 8000 0 0 0 0
   8       1 sda1 10000 80 800000 4000 5000 40 400000 2500 0 3500 6500
garbage line
";
        let disks = parse_diskstats(content);
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].device, "sda");
        assert_eq!(disks[0].read_sectors, 987654);
        assert_eq!(disks[0].write_sectors, 456789);
        assert_eq!(disks[1].device, "sda1");
        assert_eq!(disks[1].read_sectors, 800000);
    }

    #[test]
    fn test_parse_diskstats_malformed() {
        assert!(parse_diskstats("").is_empty());
        assert!(parse_diskstats("8 0 sda 1 2 3\nnot a disk line\n").is_empty());
    }
}
