mod categorize;
mod chat;
mod config;
mod models;
mod report;
mod run;
mod tax;
mod ui;

use anyhow::{Context, Result};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && run::print_info(&args[1]) {
        return Ok(());
    }
    let cfg = config::load_config()?;
    let tui = args.len() == 1;
    init_tracing(&cfg.log.level, tui)?;

    match args.len() {
        1 => run::as_tui(run::new_session(&cfg), cfg.report_dir()),
        2.. => run::as_cli(&args, &cfg),
        _ => {
            eprintln!("Usage: taxbot [command]");
            Ok(())
        }
    }
}

/// `TAXBOT_LOG` wins over the configured level. The TUI owns the terminal, so
/// it logs to `taxbot.log` in the data directory instead of stderr.
fn init_tracing(level: &str, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("TAXBOT_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let result = if tui {
        let path = config::data_dir()?.join("taxbot.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };
    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
