//! vscan - pluggable web vulnerability scanner
//!
//! Probes a target URL for reflected injection and misconfiguration defects
//! (XSS, SQLi, HTTP misconfiguration, open redirect) and writes a JSON or
//! HTML report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vscan::config::Config;
use vscan::error::ConfigError;
use vscan::reporting::{ReportFormat, ScanReport};
use vscan::scanner::{ScanEngine, ScanRun, Selection};

/// Pluggable web vulnerability scanner
#[derive(Parser, Debug)]
#[command(name = "vscan")]
#[command(author, version, about = "Web vulnerability scanner (XSS, SQLi, HTTP misconfig, open redirect)", long_about = None)]
struct Cli {
    /// Target URL to scan (e.g. https://example.com?param=1)
    #[arg(short, long)]
    url: String,

    /// Type of scan to perform
    #[arg(short, long, value_enum, default_value = "all")]
    scan_type: Selection,

    /// Output file path without extension (default: scan_report_TIMESTAMP)
    #[arg(short, long)]
    output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ReportFormat,

    /// HTTP request timeout in seconds (overrides config file)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(long, env = "VSCAN_CONFIG")]
    config: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    generate_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "VSCAN_LOG_LEVEL")]
    log_level: String,

    /// Disable the startup banner
    #[arg(long)]
    no_banner: bool,
}

const BANNER: &str = r#"
__   _____  ___ __ _ _ __
\ \ / / __|/ __/ _` | '_ \
 \ V /\__ \ (_| (_| | | | |
  \_/ |___/\___\__,_|_| |_|
"#;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.generate_config {
        return match Config::default_toml() {
            Ok(toml) => {
                println!("{}", toml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::from(2)
            }
        };
    }

    init_logging(&cli);

    if !cli.no_banner {
        println!("{}", BANNER);
        println!(" vscan v{} - web vulnerability scanner\n", env!("CARGO_PKG_VERSION"));
    }

    match run(&cli).await {
        Ok(run) if run.findings.is_empty() => ExitCode::SUCCESS,
        // Findings present: nonzero exit so scripts can branch on it.
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            if let Some(config_err) = e.downcast_ref::<ConfigError>() {
                eprintln!("error: {}", config_err);
                eprintln!("hint: {}", config_err.user_hint());
            } else {
                eprintln!("error: {:#}", e);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(cli: &Cli) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<ScanRun> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(timeout) = cli.timeout {
        config.scanner.request_timeout = timeout;
    }
    config.validate()?;

    tracing::info!(target = %cli.url, scan_type = cli.scan_type.as_str(), "Starting scan");
    tracing::info!(timeout_secs = config.scanner.request_timeout, "Using request timeout");

    let engine = ScanEngine::new(&config)?;
    let run = engine
        .run(&cli.url, cli.scan_type)
        .await
        .map_err(anyhow::Error::from)?;

    print_summary(&run);
    write_report(cli, &run)?;

    Ok(run)
}

fn print_summary(run: &ScanRun) {
    println!();
    for detector_run in &run.detector_runs {
        if detector_run.findings > 0 {
            println!(
                "[!] {}: {} issue(s) found ({} ms)",
                detector_run.detector, detector_run.findings, detector_run.duration_ms
            );
        } else {
            println!(
                "[+] {}: no vulnerabilities detected ({} ms)",
                detector_run.detector, detector_run.duration_ms
            );
        }
    }

    println!();
    for finding in &run.findings {
        println!(
            "  {} | param: {} | payload: {}",
            finding.vuln_type,
            finding.parameter.as_deref().unwrap_or("<none>"),
            finding.payload
        );
    }

    if run.findings.is_empty() {
        println!("Scan completed in {} ms. No vulnerabilities detected.", run.duration_ms);
    } else {
        println!(
            "\nScan completed in {} ms. {} vulnerabilities detected.",
            run.duration_ms,
            run.findings.len()
        );
    }
}

fn write_report(cli: &Cli, run: &ScanRun) -> Result<()> {
    let stem = cli.output.clone().unwrap_or_else(|| {
        format!("scan_report_{}", run.started_at.format("%Y%m%d_%H%M%S"))
    });

    let path = PathBuf::from(format!("{}.{}", stem, cli.format.extension()));
    let report = ScanReport::from_run(run);

    report
        .save(&path, cli.format)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    println!("Report saved to: {}", path.display());
    Ok(())
}
