//! inkgauge CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use inkgauge::{Cli, Commands, GlobalArgs, commands};
use inkgauge_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.global.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    // clap prints help when neither a subcommand nor --version-only is given
    let Some(command) = cli.command else {
        return Ok(());
    };

    let global = cli.global;
    if let Some(dir) = &global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot change into {}", dir.display()))?;
    }

    let (config, sources) = load_config(&global)?;

    let logs = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let filter = observability::env_filter(global.quiet, global.verbose, config.log_level.as_str());
    let _guard =
        observability::init_observability(&logs, filter).context("failed to set up logging")?;
    debug!(?global, files = ?sources.iter().collect::<Vec<_>>(), "starting");

    let result = run(command, &global, config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn load_config(global: &GlobalArgs) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "working directory")?);
    if let Some(path) = &global.config {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("{what} is not valid UTF-8: {}", path.display()))
}

fn run(
    command: Commands,
    global: &GlobalArgs,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let input_limit = config.input_limit();
    match command {
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, global.json, config.max_score, input_limit)
        }
        Commands::Info(args) => commands::info::cmd_info(args, global.json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start the async runtime")?
            .block_on(commands::serve::cmd_serve(args, input_limit, config)),
    }
}
