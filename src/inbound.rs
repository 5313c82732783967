use teloxide::{
    prelude::*,
    types::{Message, UpdateKind},
    utils::command::BotCommands,
};

use crate::report::Reporter;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "show the main menu.")]
    Start,
    #[command(description = "cancel the current report.")]
    Cancel,
}

/// What the user sent, reduced to the shapes the dialogue cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Command(Command),
    /// Any other `/...` text. Never used as dialogue input.
    UnknownCommand(String),
    Text(String),
    Contact { phone_number: String },
    Voice { file_id: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub chat_id: ChatId,
    pub reporter: Reporter,
    pub payload: Payload,
}

impl Payload {
    /// `bot_username` lets `/cancel@bot` style commands from group chats parse.
    pub fn from_message(message: &Message, bot_username: &str) -> Self {
        if let Some(contact) = message.contact() {
            return Payload::Contact {
                phone_number: contact.phone_number.clone(),
            };
        }
        if let Some(voice) = message.voice() {
            return Payload::Voice {
                file_id: voice.file.id.clone(),
            };
        }
        match message.text() {
            Some(text) if text.starts_with('/') => match Command::parse(text, bot_username) {
                Ok(command) => Payload::Command(command),
                Err(_) => Payload::UnknownCommand(text.to_string()),
            },
            Some(text) => Payload::Text(text.to_string()),
            None => Payload::Other,
        }
    }
}

impl Inbound {
    /// `None` for updates that are not messages from a user.
    pub fn from_update(update: &Update, bot_username: &str) -> Option<Self> {
        let message = match &update.kind {
            UpdateKind::Message(message) => message,
            _ => return None,
        };
        let user = message.from()?;

        Some(Inbound {
            chat_id: message.chat.id,
            reporter: Reporter {
                user_id: user.id,
                username: user.username.clone(),
            },
            payload: Payload::from_message(message, bot_username),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{json, Value};
    use teloxide::types::UserId;

    pub(crate) const BOT_USERNAME: &str = "AutoSafetyBot";

    fn parse_update(value: Value) -> Update {
        serde_json::from_str(&value.to_string()).unwrap()
    }

    pub(crate) fn update_with(fields: Value) -> Update {
        let mut message = json!({
            "message_id": 10,
            "date": 1714550400,
            "chat": { "id": 42, "type": "private", "first_name": "Abebe" },
            "from": { "id": 42, "is_bot": false, "first_name": "Abebe", "username": "abebe" }
        });
        for (key, value) in fields.as_object().unwrap() {
            message[key] = value.clone();
        }
        parse_update(json!({ "update_id": 1, "message": message }))
    }

    fn payload_of(fields: Value) -> Payload {
        Inbound::from_update(&update_with(fields), BOT_USERNAME)
            .unwrap()
            .payload
    }

    #[test]
    fn reads_sender_identity() {
        let inbound =
            Inbound::from_update(&update_with(json!({ "text": "ጎተራ" })), BOT_USERNAME).unwrap();

        assert_eq!(inbound.chat_id, ChatId(42));
        assert_eq!(inbound.reporter.user_id, UserId(42));
        assert_eq!(inbound.reporter.username.as_deref(), Some("abebe"));
        assert_eq!(inbound.payload, Payload::Text("ጎተራ".to_string()));
    }

    #[test]
    fn recognises_commands() {
        assert_eq!(
            payload_of(json!({ "text": "/cancel" })),
            Payload::Command(Command::Cancel)
        );
        assert_eq!(
            payload_of(json!({ "text": "/start" })),
            Payload::Command(Command::Start)
        );
        assert_eq!(
            payload_of(json!({ "text": "/weather" })),
            Payload::UnknownCommand("/weather".to_string())
        );
    }

    #[test]
    fn recognises_commands_addressed_to_this_bot() {
        assert_eq!(
            payload_of(json!({ "text": "/cancel@AutoSafetyBot" })),
            Payload::Command(Command::Cancel)
        );
        assert_eq!(
            payload_of(json!({ "text": "/start@AutoSafetyBot" })),
            Payload::Command(Command::Start)
        );
        assert_eq!(
            payload_of(json!({ "text": "/cancel@SomeOtherBot" })),
            Payload::UnknownCommand("/cancel@SomeOtherBot".to_string())
        );
    }

    #[test]
    fn reads_contact_share() {
        let payload = payload_of(json!({
            "contact": { "phone_number": "0911000000", "first_name": "Abebe", "user_id": 42 }
        }));
        assert_eq!(
            payload,
            Payload::Contact {
                phone_number: "0911000000".to_string()
            }
        );
    }

    #[test]
    fn reads_voice_note() {
        let payload = payload_of(json!({
            "voice": {
                "file_id": "AwACAgIAAx",
                "file_unique_id": "AgADBAAD",
                "duration": 3,
                "mime_type": "audio/ogg",
                "file_size": 1024
            }
        }));
        assert_eq!(
            payload,
            Payload::Voice {
                file_id: "AwACAgIAAx".to_string()
            }
        );
    }

    #[test]
    fn ignores_non_message_updates() {
        let update = parse_update(json!({
            "update_id": 2,
            "edited_message": {
                "message_id": 10,
                "date": 1714550400,
                "edit_date": 1714550500,
                "chat": { "id": 42, "type": "private", "first_name": "Abebe" },
                "from": { "id": 42, "is_bot": false, "first_name": "Abebe" },
                "text": "edited"
            }
        }));
        assert!(Inbound::from_update(&update, BOT_USERNAME).is_none());
    }
}
