use std::sync::Arc;

use teloxide::prelude::*;

use crate::error::HandlerResult;
use crate::pipeline::ResultEnvelope;
use crate::provider::extract_share_url;
use crate::state::AppState;
use crate::utils::format_size;

pub async fn handle_message(bot: Bot, state: Arc<AppState>, msg: Message) -> HandlerResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some(share_url) = extract_share_url(text) else {
        bot.send_message(
            msg.chat.id,
            "Please send me a Terabox share link, e.g. https://terabox.com/s/1AbCdEf",
        )
        .await?;
        return Ok(());
    };

    let analyze = text.to_lowercase().contains("analyze");

    let processing_msg = bot.send_message(msg.chat.id, "⏳ Processing your link...").await?;

    let envelope = state.convert(&share_url, analyze).await;

    bot.edit_message_text(msg.chat.id, processing_msg.id, render_envelope(&envelope))
        .await?;

    Ok(())
}

/// Chat rendering of the envelope; the same structure the HTTP transport
/// serializes as JSON.
fn render_envelope(envelope: &ResultEnvelope) -> String {
    if !envelope.success {
        let message = envelope
            .error
            .as_ref()
            .map(|error| error.message.clone())
            .unwrap_or_else(|| "unknown error".to_string());

        return format!(
            "❌ Could not convert this link: {}.\n\nPlease check the link or try again later.",
            message
        );
    }

    let data = &envelope.data;
    let mut lines = vec![format!("✅ {}", data.filename.clone().unwrap_or_default())];

    if let Some(size) = data.size {
        lines.push(format!("Size: {}", format_size(size)));
    }
    if let Some(mime_type) = &data.mime_type {
        lines.push(format!("Type: {}", mime_type));
    }
    if let Some(direct_url) = &data.direct_url {
        lines.push(format!("\nDirect link:\n{}", direct_url));
    }

    match &data.players {
        Some(players) => {
            lines.push("\nPlayer links:".to_string());
            lines.push(format!("VLC: {}", players.vlc));
            lines.push(format!("MX Player: {}", players.mx_player));
            lines.push(format!("Playit: {}", players.playit));
        }
        None => {
            lines.push(
                "\n⚠️ This format is not supported for playback, only the direct link is available."
                    .to_string(),
            );
        }
    }

    if let Some(analysis) = &envelope.content_analysis {
        lines.push(format!("\n🔍 Analysis:\n{}", analysis));
    }

    lines.join("\n")
}
