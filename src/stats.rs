use sysinfo::System;

/// CPU/memory snapshot for the dashboard gauges.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot {
    pub cpu_percent: u16,
    pub mem_used_mib: u64,
    pub mem_total_mib: u64,
}

/// Holds the sysinfo state between ticks; CPU usage needs two refreshes to
/// produce a delta, which the TUI's periodic tick provides naturally.
pub struct SystemStats {
    sys: System,
}

impl SystemStats {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    pub fn sample(&mut self) -> StatsSnapshot {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let cpu = self.sys.global_cpu_info().cpu_usage();
        StatsSnapshot {
            cpu_percent: cpu.clamp(0.0, 100.0) as u16,
            mem_used_mib: self.sys.used_memory() / (1024 * 1024),
            mem_total_mib: self.sys.total_memory() / (1024 * 1024),
        }
    }
}
