use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::command;

pub const DEFAULT_TARGET: &str = "8.8.8.8";

/// Outcome of the reachability probe. A skipped probe carries no target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkStatus {
    Skipped,
    Probed { target: String, reachable: bool },
}

impl NetworkStatus {
    /// One of `skipped`, `online`, `offline`.
    pub fn state_label(&self) -> &'static str {
        match self {
            NetworkStatus::Skipped => "skipped",
            NetworkStatus::Probed {
                reachable: true, ..
            } => "online",
            NetworkStatus::Probed {
                reachable: false, ..
            } => "offline",
        }
    }
}

impl Serialize for NetworkStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NetworkStatus::Skipped => {
                let mut s = serializer.serialize_struct("NetworkStatus", 1)?;
                s.serialize_field("skipped", &true)?;
                s.end()
            }
            NetworkStatus::Probed { target, reachable } => {
                let mut s = serializer.serialize_struct("NetworkStatus", 2)?;
                s.serialize_field("target", target)?;
                s.serialize_field("reachable", reachable)?;
                s.end()
            }
        }
    }
}

pub fn parse_ping_output(output: &str) -> bool {
    output.contains(", 0% packet loss") || output.contains("1 received")
}

/// Send a single echo request with a one second reply deadline.
pub async fn probe(target: &str, timeout: Duration) -> NetworkStatus {
    let output = command::run("ping", &["-c", "1", "-W", "1", target], timeout).await;
    let reachable = parse_ping_output(&output);
    tracing::debug!(ping_target = target, reachable, "ping probe finished");
    NetworkStatus::Probed {
        target: target.to_string(),
        reachable,
    }
}
