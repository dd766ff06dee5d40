use std::path::Path;
use std::time::Duration;

pub const DEFAULT_STAT_PATH: &str = "/proc/stat";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Cumulative CPU time counters from the aggregate `cpu` line of `/proc/stat`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
}

impl CpuTimes {
    pub fn total(&self) -> u64 {
        self.user + self.nice + self.system + self.idle + self.iowait + self.irq + self.softirq
    }

    pub fn idle_all(&self) -> u64 {
        self.idle + self.iowait
    }
}

/// Parse the aggregate `cpu` line. Per-core `cpuN` lines are ignored.
pub fn parse_cpu_times(content: &str) -> Option<CpuTimes> {
    let line = content
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cpu"))?;
    let values = line
        .split_whitespace()
        .skip(1)
        .take(7)
        .map(|v| v.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let [user, nice, system, idle, iowait, irq, softirq] = values[..] else {
        return None;
    };
    Some(CpuTimes {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
    })
}

/// Busy percentage between two samples, rounded to one decimal.
pub fn usage_between(before: &CpuTimes, after: &CpuTimes) -> f64 {
    let total_delta = after.total() as i128 - before.total() as i128;
    if total_delta <= 0 {
        return 0.0;
    }
    let idle_delta = after.idle_all() as i128 - before.idle_all() as i128;
    let busy = (1.0 - idle_delta as f64 / total_delta as f64) * 100.0;
    round_one_decimal(busy.clamp(0.0, 100.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn read_cpu_times(source: &Path) -> Option<CpuTimes> {
    match std::fs::read_to_string(source) {
        Ok(content) => {
            let times = parse_cpu_times(&content);
            if times.is_none() {
                tracing::warn!(path = %source.display(), "no parsable cpu line");
            }
            times
        }
        Err(err) => {
            tracing::warn!(path = %source.display(), error = %err, "cannot read cpu counters");
            None
        }
    }
}

/// Sample the counters twice, `interval` apart. Unreadable counters yield 0.0.
pub async fn sample_usage(source: &Path, interval: Duration) -> f64 {
    let Some(before) = read_cpu_times(source) else {
        return 0.0;
    };
    tokio::time::sleep(interval).await;
    let Some(after) = read_cpu_times(source) else {
        return 0.0;
    };
    usage_between(&before, &after)
}
