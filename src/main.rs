mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod window;

use anyhow::Result;
use clap::Parser;

use config::{Cli, Config};
use state::ChartState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Cli::parse());
    log::debug!("{config:?}");

    let reader = config.source.open()?;
    let ingestion = data::loader::read_samples(reader);

    let backend = config.backend.unwrap_or_else(window::detect_backend);
    let state = ChartState::from_ingestion(ingestion, config.display);
    app::present(state, &backend)
}
