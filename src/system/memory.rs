use std::time::Duration;

use serde::Serialize;

use super::command;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub total_mb: u64,
    pub used_mb: u64,
    pub free_mb: u64,
}

/// Extract the `Mem:` row of `free -m` output. Anything unexpected yields zeros.
pub fn parse_free_output(output: &str) -> MemoryInfo {
    let Some(line) = output
        .lines()
        .find(|line| line.trim_start().to_lowercase().starts_with("mem:"))
    else {
        return MemoryInfo::default();
    };

    let columns: Vec<&str> = line.split_whitespace().collect();
    let field = |idx: usize| columns.get(idx).and_then(|v| v.parse::<u64>().ok());
    match (field(1), field(2), field(3)) {
        (Some(total_mb), Some(used_mb), Some(free_mb)) => MemoryInfo {
            total_mb,
            used_mb,
            free_mb,
        },
        _ => MemoryInfo::default(),
    }
}

pub async fn collect(timeout: Duration) -> MemoryInfo {
    let output = command::run("free", &["-m"], timeout).await;
    let info = parse_free_output(&output);
    if info == MemoryInfo::default() {
        tracing::warn!("memory figures unavailable");
    }
    info
}
