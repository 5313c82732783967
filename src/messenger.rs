use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InputFile, KeyboardMarkup, ReplyMarkup},
};

use crate::types::HandlerError;

/// Outbound side of the bot. `Bot` implements it; tests use a recorder.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: Option<KeyboardMarkup>,
    ) -> Result<(), HandlerError>;

    async fn send_voice(&self, chat_id: ChatId, file_id: String) -> Result<(), HandlerError>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: String,
        keyboard: Option<KeyboardMarkup>,
    ) -> Result<(), HandlerError> {
        let request = self.send_message(chat_id, text);
        match keyboard {
            Some(keyboard) => request.reply_markup(ReplyMarkup::Keyboard(keyboard)).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn send_voice(&self, chat_id: ChatId, file_id: String) -> Result<(), HandlerError> {
        Requester::send_voice(self, chat_id, InputFile::file_id(file_id)).await?;
        Ok(())
    }
}
