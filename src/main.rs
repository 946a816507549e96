use std::sync::Arc;

use state::AppState;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

mod analysis;
mod bot;
mod command;
mod config;
mod error;
mod handler;
mod media;
mod pipeline;
mod provider;
mod server;
mod state;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init_timed();

    info!("Starting teralink...");

    let config = config::build_config()?;
    let token = config.telegram.token.clone();

    let state = Arc::new(AppState::new(config)?);

    let http = tokio::spawn(server::serve(Arc::clone(&state)));

    match token {
        Some(token) => {
            let bot_service = bot::BotService::new(token, state)?;
            bot_service
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("bot stopped: {}", e))?;
        }
        None => {
            warn!("TELEGRAM_BOT_TOKEN not set, running HTTP API only");
            http.await??;
        }
    }

    Ok(())
}
