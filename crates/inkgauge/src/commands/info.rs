//! Info command: version and the configuration this run resolved.

use std::fmt::Display;

use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use inkgauge_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    license: &'static str,
    repository: &'static str,
    config: EffectiveConfig<'a>,
}

/// What `analyze` and `serve` will run with.
#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    /// The file whose values win.
    config_file: Option<&'a Utf8Path>,
    /// Every file merged, lowest precedence first.
    config_files: Vec<&'a Utf8Path>,
    log_level: &'static str,
    log_dir: Option<&'a Utf8Path>,
    max_score: Option<f64>,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
}

impl<'a> EffectiveConfig<'a> {
    fn new(config: &'a Config, sources: &'a ConfigSources) -> Self {
        Self {
            config_file: sources.primary(),
            config_files: sources.iter().collect(),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_deref(),
            max_score: config.max_score,
            max_input_bytes: config.input_limit(),
        }
    }
}

/// Print package details and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");

    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        license: env!("CARGO_PKG_LICENSE"),
        repository: env!("CARGO_PKG_REPOSITORY"),
        config: EffectiveConfig::new(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &InfoReport<'_>) {
    println!("{} {}", report.name.bold(), report.version.green());
    println!("{}", report.description);
    row("License", report.license);
    row("Repository", report.repository.cyan());

    let config = &report.config;
    println!("\n{}", "Configuration".bold().underline());
    match config.config_files.as_slice() {
        [] => row("Config file", "none loaded".yellow()),
        files => {
            for file in files {
                row("Config file", file.cyan());
            }
        }
    }
    row("Log level", config.log_level);
    if let Some(dir) = config.log_dir {
        row("Log directory", dir);
    }

    println!("\n{}", "Readability gate".bold().underline());
    match config.max_score {
        Some(max) => row("Max score", format!("{max:.1}/10")),
        None => row("Max score", "not set".dimmed()),
    }
    match config.max_input_bytes {
        Some(limit) => row("Input limit", format!("{limit} bytes")),
        None => row("Input limit", "disabled".yellow()),
    }
}

fn row(label: &str, value: impl Display) {
    println!("  {} {value}", format!("{label}:").dimmed());
}
