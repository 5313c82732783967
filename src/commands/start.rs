use teloxide::types::ChatId;

use crate::{context::BotContext, keyboards::get_main_keyboard, templates, types::HandlerError};

pub async fn show_start_info(context: &BotContext, chat_id: ChatId) -> Result<(), HandlerError> {
    let answer = templates::render_start(&context.tera)?;
    context
        .messenger
        .send_text(chat_id, answer, Some(get_main_keyboard()))
        .await?;
    Ok(())
}
