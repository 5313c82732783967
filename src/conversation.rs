use teloxide::types::Update;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    commands::{
        cancel::cancel_report,
        question::forward_question,
        report::{
            ask_for_location, ask_for_phone, set_location, set_phone_number, submit_report,
            PhoneInput,
        },
        start::show_start_info,
    },
    context::BotContext,
    inbound::{Command, Inbound, Payload},
    report::Description,
    session::{Session, SessionKey, SessionStore},
    texts::{ANONYMOUS_REPORT_TRIGGER, QUESTION_TRIGGER, REPORT_TRIGGER},
    types::{BotDialogState, HandlerError, HandlerResult},
};

/// Routes inbound messages through the report dialogue.
pub struct Conversation {
    context: BotContext,
    sessions: SessionStore,
}

impl Conversation {
    pub fn new(context: BotContext) -> Self {
        Self {
            context,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn handle_update(&mut self, update: Update) {
        match Inbound::from_update(&update, &self.context.bot_username) {
            Some(inbound) => self.handle(inbound).await,
            None => log::debug!("Skipping update {} without a user message", update.id),
        }
    }

    pub async fn handle(&mut self, inbound: Inbound) {
        let chat_id = inbound.chat_id;
        if let Err(err) = self.route(inbound).await {
            log::error!("Failed to handle message in chat {}: {}", chat_id.0, err);
        }
    }

    async fn route(&mut self, inbound: Inbound) -> Result<(), HandlerError> {
        let Self { context, sessions } = self;
        let key: SessionKey = (inbound.chat_id, inbound.reporter.user_id);

        if inbound.payload == Payload::Command(Command::Start) {
            return show_start_info(context, inbound.chat_id).await;
        }

        match sessions.get_mut(&key) {
            Some(session) => {
                match step(context, session, &inbound).await? {
                    Some(state) => session.state = state,
                    None => {
                        sessions.end(&key);
                    }
                }
                Ok(())
            }
            None => start_dialogue(context, sessions, key, &inbound).await,
        }
    }
}

async fn start_dialogue(
    context: &BotContext,
    sessions: &mut SessionStore,
    key: SessionKey,
    inbound: &Inbound,
) -> Result<(), HandlerError> {
    let text = match &inbound.payload {
        Payload::Text(text) => text.as_str(),
        _ => return Ok(()),
    };

    let (is_anonymous, next) = match text {
        REPORT_TRIGGER => (false, ask_for_phone(context, inbound.chat_id).await?),
        ANONYMOUS_REPORT_TRIGGER => (true, ask_for_location(context, inbound.chat_id).await?),
        QUESTION_TRIGGER => {
            return forward_question(context, inbound.chat_id, &inbound.reporter, text).await
        }
        _ => return Ok(()),
    };

    if let Some(state) = next {
        sessions.begin(key, Session::new(is_anonymous, state));
    }
    Ok(())
}

/// Feeds one message into an active dialogue. Input the current state does
/// not accept leaves it where it is.
async fn step(context: &BotContext, session: &mut Session, inbound: &Inbound) -> HandlerResult {
    let chat_id = inbound.chat_id;
    match (&inbound.payload, session.state) {
        (Payload::Command(Command::Cancel), _) => cancel_report(context, chat_id).await,
        (Payload::Contact { phone_number }, BotDialogState::AwaitingPhone) => {
            set_phone_number(context, chat_id, session, PhoneInput::Contact(phone_number)).await
        }
        (Payload::Text(text), BotDialogState::AwaitingPhone) => {
            set_phone_number(context, chat_id, session, PhoneInput::Typed(text)).await
        }
        (Payload::Text(text), BotDialogState::AwaitingLocation) => {
            set_location(context, chat_id, &inbound.reporter, session, text).await
        }
        (Payload::Text(text), BotDialogState::AwaitingDescription) => {
            submit_report(context, chat_id, session, Description::Text(text.clone())).await
        }
        (Payload::Voice { file_id }, BotDialogState::AwaitingDescription) => {
            let description = Description::Voice {
                file_id: file_id.clone(),
            };
            submit_report(context, chat_id, session, description).await
        }
        _ => Ok(Some(session.state)),
    }
}

/// Drains the update queue, one update at a time.
pub async fn run(mut conversation: Conversation, mut updates: UnboundedReceiver<Update>) {
    while let Some(update) = updates.recv().await {
        conversation.handle_update(update).await;
    }
    log::info!("Update queue closed, dispatcher stopped");
}
