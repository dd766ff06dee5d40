use crate::format::{format_bool, format_percent, or_missing};
use crate::system::network::NetworkStatus;
use crate::system::snapshot::SystemSnapshot;

pub fn render_text(snapshot: &SystemSnapshot) -> String {
    let memory = &snapshot.memory;
    let root = &snapshot.disk.root;

    let network = match &snapshot.network {
        NetworkStatus::Skipped => "  Ping      : skipped".to_string(),
        NetworkStatus::Probed { reachable, .. } => {
            format!("  Reachable : {}", format_bool(*reachable))
        }
    };

    let lines = [
        "=== System Report ===".to_string(),
        format!("Timestamp   : {}", snapshot.timestamp),
        String::new(),
        "[CPU]".to_string(),
        format!("  Usage     : {}", format_percent(snapshot.cpu.usage_percent)),
        String::new(),
        "[Memory]".to_string(),
        format!("  Total     : {} MB", memory.total_mb),
        format!("  Used      : {} MB", memory.used_mb),
        format!("  Free      : {} MB", memory.free_mb),
        String::new(),
        "[Disk /]".to_string(),
        format!(
            "  Used      : {} / {} ({})",
            or_missing(root.used.as_deref()),
            or_missing(root.size.as_deref()),
            or_missing(root.use_percent.as_deref()),
        ),
        String::new(),
        "[Network]".to_string(),
        network,
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::disk::{DiskInfo, RootDisk};
    use crate::system::memory::MemoryInfo;
    use crate::system::snapshot::CpuInfo;

    fn degraded() -> SystemSnapshot {
        SystemSnapshot {
            cpu: CpuInfo::default(),
            memory: MemoryInfo::default(),
            disk: DiskInfo {
                root: RootDisk::default(),
            },
            network: NetworkStatus::Probed {
                target: "8.8.8.8".into(),
                reachable: false,
            },
            timestamp: "2025-01-01_12-00-00".into(),
        }
    }

    #[test]
    fn missing_disk_fields_show_placeholder() {
        let text = render_text(&degraded());
        assert!(text.contains("  Used      : ? / ? (?)"));
        assert!(text.contains("  Usage     : 0.0%"));
    }

    #[test]
    fn unreachable_is_false() {
        let text = render_text(&degraded());
        assert!(text.ends_with("  Reachable : False"));
        assert!(!text.contains("skipped"));
    }

    #[test]
    fn skipped_network_line() {
        let mut snapshot = degraded();
        snapshot.network = NetworkStatus::Skipped;
        let text = render_text(&snapshot);
        assert!(text.ends_with("  Ping      : skipped"));
        assert!(!text.contains("Reachable"));
    }
}
