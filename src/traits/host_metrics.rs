// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Memory figures in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryStats {
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub total_bytes: u64,
}

impl MemoryStats {
    /// Share of memory not available to new allocations.
    pub fn percent_used(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        let unavailable = self.total_bytes.saturating_sub(self.available_bytes);
        unavailable as f64 / self.total_bytes as f64 * 100.0
    }

    pub fn used_mb(&self) -> f64 {
        self.used_bytes as f64 / BYTES_PER_MB
    }

    pub fn available_mb(&self) -> f64 {
        self.available_bytes as f64 / BYTES_PER_MB
    }

    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }
}

/// Instantaneous host resource readings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostSnapshot {
    pub cpu_percent: f32,
    pub memory: MemoryStats,
}

/// Supplies CPU and memory readings for the performance report.
///
/// Sampling is assumed to always succeed.
pub trait HostMetrics: Send + Sync {
    /// Called once when a run starts, so CPU usage covers the run.
    fn begin(&self) {}

    fn snapshot(&self) -> HostSnapshot;
}
