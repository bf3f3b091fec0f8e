#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct StageStats {
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub stage_time: Duration,
    pub elapsed_time: Duration,
}

/// Tracks wall time per pipeline stage and the resident memory of this process.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start_time: Instant,
    last_checkpoint: Mutex<Instant>,
    peak_memory: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("Process monitoring unavailable: {}", e);
                None
            }
        };
        let now = Instant::now();

        Self {
            system: Mutex::new(System::new()),
            pid,
            start_time: now,
            last_checkpoint: Mutex::new(now),
            peak_memory: Mutex::new(0),
            enabled,
        }
    }

    /// Closes the current stage and samples memory. `None` when disabled.
    pub fn checkpoint(&self) -> Option<StageStats> {
        if !self.enabled {
            return None;
        }

        let memory_mb = self.sample_memory_mb().unwrap_or(0);

        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        let mut last = self.last_checkpoint.lock().ok()?;
        let now = Instant::now();
        let stage_time = now.duration_since(*last);
        *last = now;

        Some(StageStats {
            memory_usage_mb: memory_mb,
            peak_memory_mb: *peak,
            stage_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    fn sample_memory_mb(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(pid).map(|process| process.memory() / 1024 / 1024)
    }

    pub fn log_stats(&self, stage: &str) {
        if let Some(stats) = self.checkpoint() {
            tracing::info!(
                "📊 {} - Stage: {:?}, Memory: {}MB, Peak: {}MB, Total: {:?}",
                stage,
                stats.stage_time,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.checkpoint() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// Without the cli feature there is no sysinfo; monitoring is a no-op.
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _stage: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = RunMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.checkpoint().is_none());
    }

    #[test]
    fn test_enabled_monitor_tracks_elapsed_time() {
        let monitor = RunMonitor::new(true);
        let first = monitor.checkpoint().unwrap();
        let second = monitor.checkpoint().unwrap();
        assert!(second.elapsed_time >= first.elapsed_time);
        assert!(second.peak_memory_mb >= first.memory_usage_mb);
    }
}
