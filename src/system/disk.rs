use std::time::Duration;

use serde::Serialize;

use super::command;

/// Usage of the root mount, as display strings straight from `df`.
///
/// Every field is `None` when `df` could not be run or parsed; the JSON
/// record then carries an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RootDisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiskInfo {
    pub root: RootDisk,
}

/// Take the first data row after the header of `df -hP` output.
pub fn parse_df_output(output: &str) -> RootDisk {
    let Some(row) = output.lines().nth(1) else {
        return RootDisk::default();
    };
    let columns: Vec<&str> = row.split_whitespace().collect();
    let [_fs, size, used, avail, use_percent, mount, ..] = columns[..] else {
        return RootDisk::default();
    };
    RootDisk {
        size: Some(size.to_string()),
        used: Some(used.to_string()),
        avail: Some(avail.to_string()),
        use_percent: Some(use_percent.to_string()),
        mount: Some(mount.to_string()),
    }
}

pub async fn collect(timeout: Duration) -> DiskInfo {
    let output = command::run("df", &["-hP", "/"], timeout).await;
    let root = parse_df_output(&output);
    if root == RootDisk::default() {
        tracing::warn!("root filesystem usage unavailable");
    }
    DiskInfo { root }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_row() {
        let out = "Filesystem      Size  Used Avail Use% Mounted on\n\
/dev/nvme0n1p2  468G  201G  244G  46% /";
        let root = parse_df_output(out);
        assert_eq!(root.size.as_deref(), Some("468G"));
        assert_eq!(root.used.as_deref(), Some("201G"));
        assert_eq!(root.avail.as_deref(), Some("244G"));
        assert_eq!(root.use_percent.as_deref(), Some("46%"));
        assert_eq!(root.mount.as_deref(), Some("/"));
    }

    #[test]
    fn header_only_is_empty() {
        assert_eq!(
            parse_df_output("Filesystem Size Used Avail Use% Mounted on"),
            RootDisk::default()
        );
        assert_eq!(parse_df_output(""), RootDisk::default());
    }

    #[test]
    fn short_row_is_empty() {
        assert_eq!(
            parse_df_output("Filesystem Size Used\noverlay 10G 4G"),
            RootDisk::default()
        );
    }

    #[test]
    fn empty_root_serializes_as_empty_object() {
        let json = serde_json::to_string(&DiskInfo::default()).unwrap();
        assert_eq!(json, r#"{"root":{}}"#);
    }
}
