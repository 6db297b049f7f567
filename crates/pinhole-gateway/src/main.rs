mod cli;

use crate::cli::CLI;
use clap::Parser;
use pinhole_gateway::app::App;
use pinhole_gateway::state::AppState;
use pinhole_shortener::{InMemoryRepository, RandomGenerator, ShortenerService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let shortener = ShortenerService::new(InMemoryRepository::new(), RandomGenerator::new());
    let state = AppState::new(Arc::new(shortener));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
