//! hostinv
//!
//! Ansible inventory script: exports labelled hosts as `--list`, `--host` or
//! static INI inventories.

use clap::Parser;
use color_eyre::Result;
use eyre::WrapErr;
use hostinv_inventory::{FileSource, JsonStyle};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_default()?,
    };

    // stdout carries the inventory, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let hosts_path = cli
        .hosts_file
        .clone()
        .unwrap_or_else(|| config.source.path.clone());
    debug!(path = %hosts_path.display(), "using hosts file");

    let source = FileSource::new(hosts_path);
    let style = JsonStyle::from_pretty(cli.pretty || config.output.pretty);

    let stdout = std::io::stdout();
    cli::run(&cli.mode(), &source, style, &mut stdout.lock()).await
}
