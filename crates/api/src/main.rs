//! API Server Application

mod handlers;
mod routes;
mod state;

use anyhow::{Context, Result};
use loanfee_core::{FeeCalculator, FileFeeStructureLoader};
use loanfee_utils::AppConfig;
use std::net::SocketAddr;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str())
    ).init();

    // Bảng phí lỗi thì không start server
    let loader = FileFeeStructureLoader::new(&config.fee_table_path);
    let calculator = FeeCalculator::new(&loader)
        .with_context(|| format!("failed to load fee structure from {}", config.fee_table_path))?;

    let app = routes::create_router(AppState::new(calculator));

    let addr: SocketAddr = config.bind_address().parse()?;
    log::info!("🚀 {} starting at http://{}", config.app_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
