use teloxide::types::ChatId;

use crate::{context::BotContext, texts::CANCELLED, types::HandlerResult};

/// Always ends the dialogue, even when the acknowledgement cannot be sent.
pub async fn cancel_report(context: &BotContext, chat_id: ChatId) -> HandlerResult {
    if let Err(err) = context
        .messenger
        .send_text(chat_id, CANCELLED.to_string(), None)
        .await
    {
        log::error!("Failed to confirm cancel to chat {}: {}", chat_id.0, err);
    }
    Ok(None)
}
