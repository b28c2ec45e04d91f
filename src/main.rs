#![forbid(unsafe_code)]

mod constants;
mod error;
mod geometry;
mod gui;
mod position;
mod powercfg;
mod selection;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use position::PositionStore;
use powercfg::{Powercfg, PowerTool};
use selection::SelectionController;

#[derive(Parser, Debug)]
#[clap(name = constants::app::NAME, version, about = "List power plans and switch the active one")]
struct Cli {
    /// Position file to use instead of the per-user default
    #[clap(long, value_name = "FILE")]
    position_file: Option<PathBuf>,

    /// Host name to key the stored window position with
    #[clap(long, value_name = "NAME")]
    host: Option<String>,

    /// Log level (trace, debug, info, warn, error); falls back to LOG_LEVEL
    #[clap(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli
        .log_level
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let tool = Powercfg::new();
    let active_guid = tool
        .active_plan_guid()
        .inspect_err(|err| error!(error = %err, "Failed to query the active power plan"))?;
    info!(guid = %active_guid, "Active power plan");

    let plans = tool
        .list_plans()
        .inspect_err(|err| error!(error = %err, "Failed to enumerate power plans"))?;
    let controller = SelectionController::new(plans, &active_guid);

    let host = match cli.host {
        Some(host) => host,
        None => hostname::get()
            .context("Failed to resolve host name")?
            .to_string_lossy()
            .into_owned(),
    };
    let path = cli.position_file.unwrap_or_else(PositionStore::default_path);
    info!(host = %host, path = ?path, "Using position store");
    let store = PositionStore::new(path, host);

    gui::run_gui(controller, Box::new(tool), store)
}
