// debugpaste - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Bundle assembly and upload (or payload dump in dry-run mode)

use debugpaste::app::bundle::{BundleConfig, DebugBundleBuilder, ExtraFile};
use debugpaste::platform::config::{self, PlatformPaths};
use debugpaste::util::constants;
use debugpaste::util::error::{PasteError, Result};
use debugpaste::util::logging;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// debugpaste - upload a debug bundle to the IncendoPaster service.
///
/// Collects the tail of a log file, a free-text environment summary and any
/// extra files into one paste and prints the paste's view URL.
#[derive(Parser, Debug)]
#[command(name = "debugpaste", version, about)]
struct Cli {
    /// Primary log file, uploaded as `latest.log`.
    log: PathBuf,

    /// Summary text for the `information` file (repeatable, one line each).
    #[arg(short = 'i', long = "info")]
    info: Vec<String>,

    /// File whose content is appended to the summary text.
    #[arg(long = "info-file")]
    info_file: Option<PathBuf>,

    /// Extra file to include, as PATH or PATH=NAME.
    #[arg(short = 'f', long = "file", value_parser = parse_extra_file)]
    files: Vec<ExtraFile>,

    /// Override the upload endpoint.
    #[arg(long = "endpoint")]
    endpoint: Option<String>,

    /// Override the request deadline in seconds.
    #[arg(long = "timeout", value_parser = clap::value_parser!(u64).range(1..=600))]
    timeout: Option<u64>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the encoded payload instead of uploading it.
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_extra_file(value: &str) -> std::result::Result<ExtraFile, String> {
    match value.split_once('=') {
        Some((path, name)) if path.is_empty() || name.is_empty() => {
            Err(format!("expected PATH or PATH=NAME, got '{value}'"))
        }
        Some((path, name)) => Ok(ExtraFile::named(path, name)),
        None => Ok(ExtraFile::new(value)),
    }
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "debugpaste starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut bundle_config = BundleConfig::from(&app_config);
    if let Some(endpoint) = &cli.endpoint {
        bundle_config.upload.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.timeout {
        bundle_config.upload.timeout = Duration::from_secs(secs);
    }

    if let Err(e) = run(&cli, bundle_config) {
        tracing::error!(error = %e, "debugpaste failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, bundle_config: BundleConfig) -> Result<()> {
    let summary = summary_text(cli)?;
    let builder = DebugBundleBuilder::new(bundle_config);

    if cli.dry_run {
        let paster = builder.assemble(&cli.log, summary.as_deref(), &cli.files)?;
        println!("{}", paster.to_payload());
        return Ok(());
    }

    let url = builder.build_and_upload(&cli.log, summary.as_deref(), &cli.files)?;
    println!("{url}");
    Ok(())
}

/// Join `--info` lines and the `--info-file` content; `None` when neither
/// was given.
fn summary_text(cli: &Cli) -> Result<Option<String>> {
    let mut parts = cli.info.clone();
    if let Some(path) = &cli.info_file {
        let text = std::fs::read_to_string(path).map_err(|source| PasteError::Io {
            path: path.clone(),
            operation: "read",
            source,
        })?;
        parts.push(text.trim_end().to_string());
    }
    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join("\n")))
    }
}
