//! Pre-built mock filesystem scenarios for testing.

use super::MockFs;

impl MockFs {
    /// A quiet four-core machine with one disk (`sda`, partition `sda1`)
    /// and one NVMe drive.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12288000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
",
        );
        fs.add_file(
            "/proc/diskstats",
            "\
   8       0 sda 12345 100 1000 5000 6789 50 2000 3000 0 4000 8000 0 0 0 0
   8       1 sda1 10000 80 800 4000 5000 40 1500 2500 0 3500 6500 0 0 0 0
 259       0 nvme0n1 50000 200 3000 10000 30000 150 4000 8000 5 15000 18000 0 0 0 0
   7       0 loop0 10 0 999 0 0 0 0 0 0 0 0
",
        );
        fs.add_dir("/sys/block/sda");
        fs.add_dir("/sys/block/nvme0n1");

        fs
    }

    /// A machine under memory pressure without `MemAvailable` (old kernels).
    pub fn memory_pressure() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        8000000 kB
MemFree:          200000 kB
Buffers:           50000 kB
Cached:           150000 kB
",
        );
        fs
    }
}
