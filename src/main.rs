use order_board::*;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Args, Config};
use log::info;

use board::OrderBoard;
use client::OrdersClient;
use logging::log_fetch_started;
use view::HtmlPage;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    info!("🚀 Starting orders board");

    let args = Args::parse();
    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;

    config.apply_env();
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    // ===============================
    // LOAD
    // ===============================
    let client = OrdersClient::new(&config.api)?;
    log_fetch_started(client.orders_url().as_str());

    let mut board = OrderBoard::new(client, HtmlPage::page(), &config.render);
    let state = board.load().await;

    // ===============================
    // WRITE PAGE
    // ===============================
    let document = board.into_view().to_document(&config.render.page_title);

    match args.output {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Page written to {} ({})", path.display(), state);
        }
        None => print!("{}", document),
    }

    Ok(())
}
