use chrono::Local;
use teloxide::types::ChatId;

use crate::{
    context::BotContext,
    keyboards::{get_description_keyboard, get_phone_keyboard},
    notify::broadcast_report,
    report::{format_timestamp, Description, ReportDraft, Reporter},
    session::Session,
    templates,
    texts::{ASK_DESCRIPTION, ASK_LOCATION, ASK_PHONE, REPORT_SENT},
    types::{BotDialogState, HandlerResult},
};

/// Phone input as it arrived: a shared contact card wins over typed text.
pub enum PhoneInput<'a> {
    Contact(&'a str),
    Typed(&'a str),
}

pub async fn ask_for_phone(context: &BotContext, chat_id: ChatId) -> HandlerResult {
    context
        .messenger
        .send_text(chat_id, ASK_PHONE.to_string(), Some(get_phone_keyboard()))
        .await?;
    Ok(Some(BotDialogState::AwaitingPhone))
}

pub async fn ask_for_location(context: &BotContext, chat_id: ChatId) -> HandlerResult {
    context
        .messenger
        .send_text(chat_id, ASK_LOCATION.to_string(), None)
        .await?;
    Ok(Some(BotDialogState::AwaitingLocation))
}

pub async fn set_phone_number(
    context: &BotContext,
    chat_id: ChatId,
    session: &mut Session,
    input: PhoneInput<'_>,
) -> HandlerResult {
    let phone_number = match input {
        PhoneInput::Contact(phone) => phone,
        PhoneInput::Typed(text) => text,
    };
    session.phone_number = Some(phone_number.to_string());
    ask_for_location(context, chat_id).await
}

pub async fn set_location(
    context: &BotContext,
    chat_id: ChatId,
    reporter: &Reporter,
    session: &mut Session,
    location: &str,
) -> HandlerResult {
    if location.trim().is_empty() {
        return ask_for_location(context, chat_id).await;
    }

    session.partial_report = Some(ReportDraft::new(
        location.to_string(),
        format_timestamp(Local::now()),
        reporter,
        session.is_anonymous,
        session.phone_number.clone(),
    ));

    context
        .messenger
        .send_text(
            chat_id,
            ASK_DESCRIPTION.to_string(),
            Some(get_description_keyboard()),
        )
        .await?;
    Ok(Some(BotDialogState::AwaitingDescription))
}

/// Final step: builds the report, relays it, appends it to the log and
/// thanks the reporter. Relay and log failures are only logged.
pub async fn submit_report(
    context: &BotContext,
    chat_id: ChatId,
    session: &Session,
    description: Description,
) -> HandlerResult {
    let draft = session
        .partial_report
        .clone()
        .ok_or("report draft is missing at the description step")?;
    let report = draft.finish(description);
    let text = templates::render_report(&context.tera, &report)?;

    let summary = broadcast_report(&*context.messenger, &context.roster, &report, &text).await;
    log::info!(
        "Report for {} relayed: {} sends, {} failed",
        report.location,
        summary.attempts,
        summary.failures
    );
    context.reports.record(&report).await;

    if let Err(err) = context
        .messenger
        .send_text(chat_id, REPORT_SENT.to_string(), None)
        .await
    {
        log::error!("Failed to confirm report to chat {}: {}", chat_id.0, err);
    }
    Ok(None)
}
