use std::sync::Arc;

use teloxide::prelude::*;

use crate::command::Command;
use crate::error::HandlerResult;
use crate::state::AppState;

pub async fn handle_command(
    bot: Bot,
    state: Arc<AppState>,
    msg: Message,
    cmd: Command,
) -> HandlerResult<()> {
    match cmd {
        Command::Start => handle_start(&bot, &msg).await,
        Command::Help => handle_help(&bot, &msg).await,
        Command::Status => handle_status(&bot, &state, &msg).await,
        Command::About => handle_about(&bot, &msg).await,
    }
}

async fn handle_start(bot: &Bot, msg: &Message) -> HandlerResult<()> {
    let first_name = msg
        .from
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    let welcome_text = format!(
        "👋 Hi {}!\n\n\
        Send me a Terabox share link and I will convert it into direct \
        streaming links for VLC, MX Player and Playit.\n\n\
        Use /help to see available commands.",
        first_name
    );

    bot.send_message(msg.chat.id, welcome_text).await?;

    Ok(())
}

async fn handle_help(bot: &Bot, msg: &Message) -> HandlerResult<()> {
    let help_text = "📖 Available commands:\n\n\
        /start - Start the bot\n\
        /help - Show this help message\n\
        /status - Check bot status\n\
        /about - About the bot\n\n\
        Simply send me a Terabox link to convert it. Add the word \
        \"analyze\" to your message to get a content analysis as well.";

    bot.send_message(msg.chat.id, help_text).await?;

    Ok(())
}

async fn handle_status(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult<()> {
    let is_admin = msg
        .from
        .as_ref()
        .map(|user| state.config.admin.is_admin(user.id))
        .unwrap_or(false);

    if !is_admin {
        bot.send_message(msg.chat.id, "This command is only available to admins.")
            .await?;
        return Ok(());
    }

    let status_text = format!(
        "🤖 Teralink v{}\n\n\
        Content analysis: {}\n\
        Rate limit: {} requests per {} seconds",
        env!("CARGO_PKG_VERSION"),
        if state.analyzer.is_some() { "enabled" } else { "disabled" },
        state.config.rate_limit.max_requests,
        state.config.rate_limit.window_secs,
    );

    bot.send_message(msg.chat.id, status_text).await?;

    Ok(())
}

async fn handle_about(bot: &Bot, msg: &Message) -> HandlerResult<()> {
    let about_text = format!(
        "🤖 Teralink v{}\n\n\
        Converts Terabox share links into streaming links for \
        VLC, MX Player and Playit.",
        env!("CARGO_PKG_VERSION")
    );

    bot.send_message(msg.chat.id, about_text).await?;

    Ok(())
}
