//! Analyze command — readability score, complex words, and suggestions.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use inkgauge_core::readability::{self, ReadabilityReport, ScoreBand, Suggestion};

use super::read_input_file;

/// Printed instead of a report when the document is empty.
pub const NO_CONTENT_MESSAGE: &str = "No content to analyze.";

/// Printed when a report carries no suggestions.
pub const NO_ISSUES_MESSAGE: &str = "No major issues found in your writing!";

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (HTML or plain text).
    pub file: Utf8PathBuf,

    /// Maximum acceptable readability score (1–10).
    #[arg(long)]
    pub max_score: Option<f64>,
}

/// Analyze a file and print its readability report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_max_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_score = ?args.max_score, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    if content.is_empty() {
        debug!(file = %args.file, "empty document, skipping analysis");
        if global_json {
            println!("null");
        } else {
            println!("{}", NO_CONTENT_MESSAGE.dimmed());
        }
        return Ok(());
    }

    let max_score = args.max_score.or(config_max_score);
    let report = readability::check_readability(&content, max_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_report(&report);

    if report.over_max {
        let max = report.max_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1}/10 (max: {:.1}). Simplify complex words or shorten sentences.",
            args.file,
            report.readability_score,
            max,
        );
    } else if let Some(max) = report.max_score {
        println!(
            "\n{} {} scores {:.1}/10 (max: {:.1})",
            "PASS:".green(),
            args.file,
            report.readability_score,
            max,
        );
    }

    Ok(())
}

fn print_report(report: &ReadabilityReport) {
    let score = format!("{:.1}/10", report.readability_score);
    let score = match report.band {
        ScoreBand::Easy => score.green().to_string(),
        ScoreBand::Moderate => score.yellow().to_string(),
        ScoreBand::Hard => score.red().to_string(),
    };
    println!(
        "\n  {} {} ({}), {} sentences, {} words",
        "Readability:".cyan(),
        score,
        report.band,
        report.sentences,
        report.terms,
    );

    if report.suggestions.is_empty() {
        println!("\n  {}", NO_ISSUES_MESSAGE.green());
        return;
    }

    println!("\n  {}", "Suggestions:".cyan());
    for suggestion in &report.suggestions {
        println!(
            "    {} {}",
            format!("[{}]", suggestion.kind()).yellow(),
            suggestion.message()
        );
        if let Suggestion::Complexity { words, .. } = suggestion {
            for word in words {
                println!("      - {word}");
            }
        }
    }
}
