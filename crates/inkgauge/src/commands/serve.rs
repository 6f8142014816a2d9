//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{debug, info, instrument};

use inkgauge_core::config::Config;

use crate::server::InkServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; nothing to configure yet
}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    debug!(max_input_bytes = ?max_input_bytes, max_score = ?config.max_score, "executing serve command");

    let server = InkServer::new()
        .with_input_limit(max_input_bytes)
        .with_max_score(config.max_score);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server on stdio")?;
    info!("MCP server running on stdio");

    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
