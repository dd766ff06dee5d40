use crate::format::{
    clamp_percent, escape_html, format_percent, or_missing, parse_percent, ratio_percent,
};
use crate::system::snapshot::SystemSnapshot;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem}\
.card{border:1px solid #ddd;border-radius:12px;padding:1rem;margin:.8rem 0}\
.bar{background:#eee;width:100%;height:10px;border-radius:6px}\
.fill{height:10px;border-radius:6px;background:#4a7}";

/// Horizontal gauge; `pct` is clamped into 0..=100.
fn bar(pct: f64) -> String {
    format!(
        r#"<div class="bar"><div class="fill" style="width:{:.1}%"></div></div>"#,
        clamp_percent(pct)
    )
}

fn card(title: &str, body: &str, gauge: Option<f64>) -> String {
    let gauge = gauge.map(bar).unwrap_or_default();
    format!(r#"<div class="card"><h2>{title}</h2><p>{body}</p>{gauge}</div>"#)
}

/// Render a self-contained HTML document with one card per metric.
pub fn render_html(snapshot: &SystemSnapshot) -> String {
    let cpu = snapshot.cpu.usage_percent;
    let memory = &snapshot.memory;
    let root = &snapshot.disk.root;

    let memory_pct = ratio_percent(memory.used_mb, memory.total_mb);
    let disk_pct = parse_percent(root.use_percent.as_deref());
    let disk_body = format!(
        "{} / {} ({})",
        escape_html(or_missing(root.used.as_deref())),
        escape_html(or_missing(root.size.as_deref())),
        escape_html(or_missing(root.use_percent.as_deref())),
    );

    let cards = [
        card("CPU", &format_percent(cpu), Some(cpu)),
        card(
            "Memory",
            &format!("{} / {} MB", memory.used_mb, memory.total_mb),
            Some(memory_pct),
        ),
        card("Disk (/)", &disk_body, Some(disk_pct)),
        card("Network", snapshot.network.state_label(), None),
    ]
    .join("\n");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>System Report</title>
<style>{STYLE}</style>
</head>
<body>
<h1>System Report</h1>
<p><b>Timestamp:</b> {timestamp}</p>
{cards}
</body>
</html>
"#,
        timestamp = escape_html(&snapshot.timestamp),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_clamped() {
        assert!(bar(150.0).contains("width:100.0%"));
        assert!(bar(-3.0).contains("width:0.0%"));
        assert!(bar(40.0).contains("width:40.0%"));
    }

    #[test]
    fn card_without_gauge_has_no_bar() {
        let html = card("Network", "online", None);
        assert!(!html.contains("class=\"bar\""));
        assert!(html.contains("<p>online</p>"));
    }
}
