//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use contador_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ContadorServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; no options yet.
}

/// Serve MCP over stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(
        excluded = ?config.exclusions.active_classes(),
        keywords = config.keywords.len(),
        "starting MCP server on stdio"
    );

    let service = ContadorServer::from_config(&config, max_input)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
