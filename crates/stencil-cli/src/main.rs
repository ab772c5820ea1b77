// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::Parser;
use std::path::PathBuf;
use stencil::Region;
use stencil_cli::commands::Command;
use stencil_cli::config::{Config, CONFIG_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Browse, apply and remember site-builder layout templates", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to the project configuration
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Region to template: header, footer (overrides the configuration)
    #[arg(short, long, global = true)]
    region: Option<Region>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?;
    let region = cli.region.unwrap_or(config.catalog.region);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stencil_cli::execute(&config, region, cli.command, &mut out)
}
