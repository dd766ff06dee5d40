use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

use super::snapshot::{CpuInfo, SystemSnapshot, TIMESTAMP_FORMAT};
use super::{command, cpu, disk, memory, network};

#[derive(Clone, Debug)]
pub struct CollectorSettings {
    pub stat_path: PathBuf,
    pub cpu_interval: Duration,
    pub command_timeout: Duration,
    /// `None` skips the reachability probe.
    pub ping_target: Option<String>,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        CollectorSettings {
            stat_path: PathBuf::from(cpu::DEFAULT_STAT_PATH),
            cpu_interval: cpu::DEFAULT_INTERVAL,
            command_timeout: command::DEFAULT_TIMEOUT,
            ping_target: Some(network::DEFAULT_TARGET.to_string()),
        }
    }
}

pub struct Collector {
    settings: CollectorSettings,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(CollectorSettings::default())
    }
}

impl Collector {
    pub fn new(settings: CollectorSettings) -> Self {
        Collector { settings }
    }

    pub fn settings(&self) -> &CollectorSettings {
        &self.settings
    }

    /// Run every collector once, one after another, and stamp the result.
    #[tracing::instrument(name = "collector.collect", level = "debug", skip_all)]
    pub async fn collect(&self) -> SystemSnapshot {
        let usage_percent =
            cpu::sample_usage(&self.settings.stat_path, self.settings.cpu_interval).await;
        let memory = memory::collect(self.settings.command_timeout).await;
        let disk = disk::collect(self.settings.command_timeout).await;
        let network = match &self.settings.ping_target {
            Some(target) => network::probe(target, self.settings.command_timeout).await,
            None => network::NetworkStatus::Skipped,
        };

        let snapshot = SystemSnapshot {
            cpu: CpuInfo { usage_percent },
            memory,
            disk,
            network,
            timestamp: current_timestamp(),
        };
        tracing::debug!(timestamp = %snapshot.timestamp, "snapshot assembled");
        snapshot
    }
}

pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_fixed_shape() {
        let ts = current_timestamp();
        assert_eq!(ts.len(), "2025-01-01_12-00-00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn default_settings_probe_default_target() {
        let collector = Collector::default();
        assert_eq!(collector.settings().ping_target.as_deref(), Some("8.8.8.8"));
        assert_eq!(collector.settings().cpu_interval, Duration::from_millis(200));
    }

    #[tokio::test]
    async fn skipped_ping_and_missing_counters_still_assemble() {
        let collector = Collector::new(CollectorSettings {
            stat_path: PathBuf::from("/nonexistent/stat"),
            cpu_interval: Duration::ZERO,
            command_timeout: Duration::from_secs(2),
            ping_target: None,
        });
        let snapshot = collector.collect().await;
        assert_eq!(snapshot.cpu.usage_percent, 0.0);
        assert_eq!(snapshot.network, network::NetworkStatus::Skipped);
        assert_eq!(snapshot.timestamp.len(), 19);
    }
}
