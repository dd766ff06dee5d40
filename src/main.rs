use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use sysreport::config::{Config, load_config, load_config_from_path};
use sysreport::persist::{SaveOutcome, report_path, save_with_fallback};
use sysreport::report::{render_html, render_text};
use sysreport::system::collector::Collector;

#[derive(Parser)]
#[command(
    name = "sysreport",
    about = "Snapshot CPU, memory, disk and network state as text, HTML or JSON"
)]
struct Cli {
    /// Write a JSON report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write an HTML report
    #[arg(long, default_value_t = false)]
    html: bool,

    /// Target directory for reports [default: reports]
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Skip the network probe
    #[arg(long, default_value_t = false)]
    no_ping: bool,

    /// Host to ping [default: 8.8.8.8]
    #[arg(long)]
    target: Option<String>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config_for_cli(&cli);

    let outdir = config.general.outdir.clone();
    if let Err(err) = std::fs::create_dir_all(&outdir) {
        tracing::warn!(dir = %outdir.display(), error = %err, "cannot create output directory");
    }

    let snapshot = Collector::new(config.collector_settings()).collect().await;

    println!("{}", render_text(&snapshot));

    let fallback_dir = config.fallback_dir();
    if cli.json {
        let json = snapshot
            .to_json()
            .wrap_err("failed to serialize snapshot")?;
        let saved = save(&outdir, &snapshot.timestamp, "json", &json, &fallback_dir)?;
        println!("JSON saved: {}", saved.path().display());
    }
    if cli.html {
        let html = render_html(&snapshot);
        let saved = save(&outdir, &snapshot.timestamp, "html", &html, &fallback_dir)?;
        println!("HTML saved: {}", saved.path().display());
    }

    Ok(())
}

fn save(
    outdir: &Path,
    timestamp: &str,
    ext: &str,
    contents: &str,
    fallback_dir: &Path,
) -> Result<SaveOutcome> {
    let path = report_path(outdir, timestamp, ext);
    save_with_fallback(&path, contents, fallback_dir)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref outdir) = cli.outdir {
        config.general.outdir = outdir.clone();
    }
    if let Some(ref target) = cli.target {
        config.general.ping_target = target.clone();
    }
    if cli.no_ping {
        config.general.ping = false;
    }

    config
}
