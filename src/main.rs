mod app;
mod config;
mod contact;
mod listings;
mod models;
mod session;

use app::App;
use config::Config;
use contact::SimulatedSender;
use listings::MockCatalog;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional config file as the only argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).await?;

    // Initialize logging, RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Addis Scout - listing browser");
    info!("================================");
    info!(
        "Filter mode {:?}, contact delay {} ms",
        config.filter_mode, config.contact_delay_ms
    );

    let catalog = Arc::new(MockCatalog::new());
    let sender = Arc::new(SimulatedSender::new(config.contact_delay()));
    let mut app = App::new(&config, catalog, sender);

    println!("{}", session::HELP);
    session::run(&mut app, BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}
