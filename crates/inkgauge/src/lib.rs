//! The `inkgauge` command line.
//!
//! Argument types live here so integration tests and the binary share them;
//! `main.rs` only wires configuration, logging and dispatch.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide `owo-colors` override.
    pub fn apply(self) {
        let forced = match self {
            Self::Auto => return,
            Self::Always => true,
            Self::Never => false,
        };
        owo_colors::set_override(forced);
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT:
    RUST_LOG              Log filter, e.g. `debug` or `inkgauge_core=trace`
    INKGAUGE_LOG_PATH     Write JSONL logs to this exact file
    INKGAUGE_LOG_DIR      Write daily JSONL logs into this directory
    INKGAUGE_<KEY>        Override any config key, e.g. INKGAUGE_MAX_SCORE=6
";

/// Score how hard a piece of writing is to read.
#[derive(Debug, Parser)]
#[command(name = "inkgauge", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Options accepted by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Extra config file, merged above discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long = "chdir", global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Terminal colors
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a document and list complex words and suggestions
    Analyze(commands::analyze::AnalyzeArgs),

    /// Show version and effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the analyzer to MCP clients over stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}
