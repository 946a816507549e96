use std::sync::Arc;

use teloxide::{dptree, prelude::*};

use crate::command;
use crate::error::{BotResult, HandlerResult};
use crate::handler::get_handler;
use crate::state::AppState;
use crate::utils::http;

pub struct BotService {
    bot: Bot,
    state: Arc<AppState>,
}

impl BotService {
    pub fn new(token: String, state: Arc<AppState>) -> BotResult<Self> {
        let client = http::create_bot_client()?;

        Ok(Self {
            bot: Bot::with_client(token, client),
            state,
        })
    }

    pub async fn start(&self) -> HandlerResult<()> {
        info!("Testing connection to Telegram API...");
        match self.bot.get_me().await {
            Ok(_) => info!("Successfully connected to Telegram API"),
            Err(e) => {
                error!("Failed to connect to Telegram API: {:?}", e);
                return Err(anyhow::anyhow!("Failed to connect to Telegram API: {}", e).into());
            }
        }

        command::setup_commands(&self.bot).await?;

        Dispatcher::builder(self.bot.clone(), get_handler())
            .dependencies(dptree::deps![Arc::clone(&self.state)])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
