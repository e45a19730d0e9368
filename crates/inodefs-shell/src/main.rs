//! inodefs binary
//!
//! Interactive in-memory file namespace.
//!
//! ## Usage
//!
//! ```bash
//! # Empty root
//! inodefs
//!
//! # Seed directories and log resolution steps to stderr
//! inodefs --dir /home/user --dir /tmp --log-level inodefs_kernel=trace
//!
//! # Explicit config file
//! inodefs --config ./shell.ron
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use inodefs_kernel::Namespace;
use inodefs_shell::{Shell, ShellConfig};

/// Interactive in-memory file namespace.
#[derive(Parser, Debug)]
#[command(name = "inodefs")]
#[command(about = "Menu-driven in-memory file namespace")]
struct Args {
    /// Config file (default: ~/.config/inodefs/shell.ron)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter, overrides the config file (RUST_LOG wins over both)
    #[arg(long)]
    log_level: Option<String>,

    /// Directory to create before the first prompt (repeatable)
    #[arg(long = "dir")]
    dirs: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ShellConfig::load(args.config.as_deref()).context("loading config")?;

    let level = args.log_level.as_deref().unwrap_or(config.log_level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // stdout carries the menu; logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let ns = Namespace::with_directories(config.directories.iter().chain(&args.dirs))
        .context("seeding directories")?;
    tracing::info!(
        top_level_entries = ns.root().len(),
        default_permissions = %config.default_permissions,
        "Starting inodefs shell"
    );

    let mut shell = Shell::new(ns, io::stdin().lock(), io::stdout().lock(), config);
    shell.run().context("terminal I/O")?;

    tracing::info!("inodefs shell exiting");
    Ok(())
}
