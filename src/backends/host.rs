// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;
use sysinfo::System;

use crate::traits::{HostMetrics, HostSnapshot, MemoryStats};

/// Host metrics read through `sysinfo`.
///
/// CPU usage is the average across cores since the previous refresh, so
/// [`HostMetrics::begin`] primes a refresh at run start and the snapshot
/// reports usage over the run.
pub struct SysinfoHostMetrics {
    system: Mutex<System>,
}

impl SysinfoHostMetrics {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for SysinfoHostMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HostMetrics for SysinfoHostMetrics {
    fn begin(&self) {
        let mut system = self.system.lock().unwrap_or_else(|e| e.into_inner());
        system.refresh_cpu_usage();
    }

    fn snapshot(&self) -> HostSnapshot {
        let mut system = self.system.lock().unwrap_or_else(|e| e.into_inner());
        system.refresh_cpu_usage();
        system.refresh_memory();

        HostSnapshot {
            cpu_percent: system.global_cpu_usage(),
            memory: MemoryStats {
                used_bytes: system.used_memory(),
                available_bytes: system.available_memory(),
                total_bytes: system.total_memory(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reports_plausible_values() {
        let metrics = SysinfoHostMetrics::new();
        metrics.begin();
        let snapshot = metrics.snapshot();

        assert!(snapshot.cpu_percent >= 0.0);
        assert!(snapshot.memory.percent_used() >= 0.0);
        assert!(snapshot.memory.percent_used() <= 100.0);
        assert!(snapshot.memory.available_bytes <= snapshot.memory.total_bytes);
    }
}
