use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an external utility and return its stdout followed by stderr, trimmed.
///
/// Missing programs, non-zero exits and timeouts all yield an empty string.
/// A child that outlives `timeout` is killed.
pub async fn run(program: &str, args: &[&str], timeout: Duration) -> String {
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(err)) => {
            tracing::debug!(program, error = %err, "failed to spawn utility");
            return String::new();
        }
        Err(_) => {
            tracing::warn!(program, ?timeout, "utility timed out");
            return String::new();
        }
    };

    if !output.status.success() {
        tracing::debug!(program, status = ?output.status.code(), "utility exited unsuccessfully");
        return String::new();
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim().to_string()
}
