use std::error::Error;

/// Steps of the report dialogue. A user with no session is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDialogState {
    AwaitingPhone,
    AwaitingLocation,
    AwaitingDescription,
}

pub type HandlerError = Box<dyn Error + Send + Sync>;

/// `Ok(None)` ends the dialogue, `Ok(Some(state))` moves it to `state`.
pub type HandlerResult = Result<Option<BotDialogState>, HandlerError>;
