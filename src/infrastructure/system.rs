//! # System Statistics
//!
//! Process uptime and host memory for the menu header.
//! Memory figures come from `/proc/meminfo`; hosts without it report zero.

use std::time::Instant;

use crate::domain::traits::RuntimeStats;

const MEMINFO_PATH: &str = "/proc/meminfo";

pub struct SystemStats {
    started: Instant,
    meminfo_path: String,
}

impl SystemStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            meminfo_path: MEMINFO_PATH.to_string(),
        }
    }

    fn read_meminfo(&self) -> Option<MemInfo> {
        match std::fs::read_to_string(&self.meminfo_path) {
            Ok(content) => Some(MemInfo::parse(&content)),
            Err(e) => {
                tracing::warn!("{}", crate::strings::logs::meminfo_unavailable(&e.to_string()));
                None
            }
        }
    }
}

impl Default for SystemStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeStats for SystemStats {
    fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn total_memory(&self) -> u64 {
        self.read_meminfo().map(|m| m.total).unwrap_or(0)
    }

    fn free_memory(&self) -> u64 {
        self.read_meminfo().map(|m| m.free).unwrap_or(0)
    }
}

/// Byte figures extracted from `/proc/meminfo`.
#[derive(Debug, Default, PartialEq)]
struct MemInfo {
    total: u64,
    free: u64,
}

impl MemInfo {
    fn parse(content: &str) -> Self {
        let mut total = 0;
        let mut available = None;
        let mut free = 0;

        for line in content.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let kb = value
                .split_whitespace()
                .next()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            match key.trim() {
                "MemTotal" => total = kb * 1024,
                "MemAvailable" => available = Some(kb * 1024),
                "MemFree" => free = kb * 1024,
                _ => {}
            }
        }

        Self {
            total,
            free: available.unwrap_or(free),
        }
    }
}
