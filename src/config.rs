use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::system::collector::CollectorSettings;
use crate::system::network::DEFAULT_TARGET;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub sampling: SamplingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub outdir: PathBuf,
    pub ping: bool,
    pub ping_target: String,
    /// Defaults to the OS temp dir when unset.
    pub fallback_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            outdir: PathBuf::from("reports"),
            ping: true,
            ping_target: DEFAULT_TARGET.to_string(),
            fallback_dir: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub stat_path: PathBuf,
    pub cpu_interval_ms: u64,
    pub command_timeout_ms: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            stat_path: PathBuf::from("/proc/stat"),
            cpu_interval_ms: 200,
            command_timeout_ms: 5000,
        }
    }
}

impl Config {
    pub fn fallback_dir(&self) -> PathBuf {
        self.general
            .fallback_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn collector_settings(&self) -> CollectorSettings {
        CollectorSettings {
            stat_path: self.sampling.stat_path.clone(),
            cpu_interval: Duration::from_millis(self.sampling.cpu_interval_ms),
            command_timeout: Duration::from_millis(self.sampling.command_timeout_ms),
            ping_target: self
                .general
                .ping
                .then(|| self.general.ping_target.clone()),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysreport").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "config not readable");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.outdir, PathBuf::from("reports"));
        assert!(config.general.ping);
        assert_eq!(config.general.ping_target, "8.8.8.8");
        assert_eq!(config.sampling.stat_path, PathBuf::from("/proc/stat"));
        assert_eq!(config.sampling.cpu_interval_ms, 200);
        assert_eq!(config.sampling.command_timeout_ms, 5000);
        assert_eq!(config.fallback_dir(), std::env::temp_dir());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[sampling]
cpu_interval_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sampling.cpu_interval_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.sampling.command_timeout_ms, 5000);
        assert_eq!(config.general.ping_target, "8.8.8.8");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
outdir = "/var/tmp/reports"
ping = false
ping_target = "1.1.1.1"
fallback_dir = "/srv/spool"

[sampling]
stat_path = "/host/proc/stat"
cpu_interval_ms = 1000
command_timeout_ms = 250
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.outdir, PathBuf::from("/var/tmp/reports"));
        assert_eq!(config.fallback_dir(), PathBuf::from("/srv/spool"));

        let settings = config.collector_settings();
        assert_eq!(settings.ping_target, None);
        assert_eq!(settings.stat_path, PathBuf::from("/host/proc/stat"));
        assert_eq!(settings.cpu_interval, Duration::from_secs(1));
        assert_eq!(settings.command_timeout, Duration::from_millis(250));
    }

    #[test]
    fn ping_target_flows_into_settings() {
        let mut config = Config::default();
        config.general.ping_target = "192.0.2.1".into();
        assert_eq!(
            config.collector_settings().ping_target.as_deref(),
            Some("192.0.2.1")
        );
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.sampling.cpu_interval_ms, 200);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&path);
        assert_eq!(config.sampling.cpu_interval_ms, 200);
    }
}
