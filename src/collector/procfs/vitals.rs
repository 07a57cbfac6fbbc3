//! CPU, memory and block I/O readings for the vitals line.

use std::path::Path;

use tracing::debug;

use crate::collector::procfs::parser::{CpuStat, parse_cpu_stat, parse_diskstats, parse_meminfo};
use crate::collector::traits::FileSystem;
use crate::collector::{CollectError, VitalsSource};
use crate::model::IoCounters;

/// `/proc/diskstats` always counts 512-byte sectors, whatever the device.
const SECTOR_SIZE: u64 = 512;

/// Reads host vitals from `/proc`, remembering the previous CPU counters so
/// that each call reports utilization since the last one.
pub struct VitalsCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
    sys_path: String,
    prev_cpu: Option<CpuStat>,
}

impl<F: FileSystem> VitalsCollector<F> {
    /// Creates the collector and primes the CPU baseline.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    /// * `sys_path` - Base path to sysfs (usually "/sys"), used to tell disks from partitions
    pub fn new(fs: F, proc_path: impl Into<String>, sys_path: impl Into<String>) -> Self {
        let mut collector = Self {
            fs,
            proc_path: proc_path.into(),
            sys_path: sys_path.into(),
            prev_cpu: None,
        };
        collector.prev_cpu = collector.read_cpu().ok();
        collector
    }

    /// Lets tests advance the mocked counters between reads.
    #[cfg(test)]
    fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    fn read(&self, file: &str) -> Result<String, CollectError> {
        let path = format!("{}/{}", self.proc_path, file);
        Ok(self.fs.read_to_string(Path::new(&path))?)
    }

    fn read_cpu(&self) -> Result<CpuStat, CollectError> {
        Ok(parse_cpu_stat(&self.read("stat")?)?)
    }

    /// Reads memory utilization from `/proc/meminfo`.
    pub fn collect_mem_percent(&self) -> Result<f64, CollectError> {
        Ok(parse_meminfo(&self.read("meminfo")?)?.used_percent())
    }

    /// Sums read/write bytes over whole disks in `/proc/diskstats`.
    ///
    /// Partitions and virtual devices without a `/sys/block/<name>` entry are
    /// skipped so their traffic is not counted twice.
    pub fn collect_io_counters(&self) -> Result<IoCounters, CollectError> {
        let disks = parse_diskstats(&self.read("diskstats")?);
        let mut counters = IoCounters::default();
        for disk in disks {
            let sys_name = disk.device.replace('/', "!");
            let block = format!("{}/block/{}", self.sys_path, sys_name);
            if !self.fs.exists(Path::new(&block)) {
                continue;
            }
            counters.read_bytes += disk.read_sectors * SECTOR_SIZE;
            counters.write_bytes += disk.write_sectors * SECTOR_SIZE;
        }
        Ok(counters)
    }
}

fn busy_percent(prev: &CpuStat, cur: &CpuStat) -> f64 {
    let total = cur.total().saturating_sub(prev.total());
    if total == 0 {
        return 0.0;
    }
    let busy = cur.busy().saturating_sub(prev.busy());
    (busy as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

impl<F: FileSystem> VitalsSource for VitalsCollector<F> {
    fn cpu_percent(&mut self) -> f64 {
        match self.read_cpu() {
            Ok(cur) => {
                let pct = self
                    .prev_cpu
                    .as_ref()
                    .map(|prev| busy_percent(prev, &cur))
                    .unwrap_or(0.0);
                self.prev_cpu = Some(cur);
                pct
            }
            Err(e) => {
                debug!(error = %e, "cpu read failed");
                0.0
            }
        }
    }

    fn mem_percent(&mut self) -> f64 {
        self.collect_mem_percent().unwrap_or_else(|e| {
            debug!(error = %e, "meminfo read failed");
            0.0
        })
    }

    fn io_counters(&mut self) -> Option<IoCounters> {
        match self.collect_io_counters() {
            Ok(counters) => Some(counters),
            Err(e) => {
                debug!(error = %e, "diskstats read failed");
                None
            }
        }
    }
}
