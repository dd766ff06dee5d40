use serde::Serialize;

use super::disk::DiskInfo;
use super::memory::MemoryInfo;
use super::network::NetworkStatus;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CpuInfo {
    pub usage_percent: f64,
}

/// Everything collected in one run. Field order is the JSON key order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemSnapshot {
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub disk: DiskInfo,
    pub network: NetworkStatus,
    pub timestamp: String,
}

impl SystemSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
