use teloxide::types::ChatId;

use crate::{
    context::BotContext, notify::broadcast_text, report::Reporter, templates,
    texts::QUESTION_SENT, types::HandlerError,
};

/// Relays a question to every admin and thanks the sender. Touches no session.
pub async fn forward_question(
    context: &BotContext,
    chat_id: ChatId,
    reporter: &Reporter,
    question: &str,
) -> Result<(), HandlerError> {
    let text = templates::render_question(&context.tera, reporter.username.as_deref(), question)?;
    let summary = broadcast_text(&*context.messenger, &context.roster, &text, "question").await;
    log::info!(
        "Question from {} relayed to {} admins, {} failed",
        reporter.user_id.0,
        summary.attempts,
        summary.failures
    );

    context
        .messenger
        .send_text(chat_id, QUESTION_SENT.to_string(), None)
        .await?;
    Ok(())
}
