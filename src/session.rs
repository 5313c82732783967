use std::collections::HashMap;

use teloxide::types::{ChatId, UserId};

use crate::{report::ReportDraft, types::BotDialogState};

pub type SessionKey = (ChatId, UserId);

/// Data collected so far in one report dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub state: BotDialogState,
    pub is_anonymous: bool,
    pub phone_number: Option<String>,
    pub partial_report: Option<ReportDraft>,
}

impl Session {
    pub fn new(is_anonymous: bool, state: BotDialogState) -> Self {
        Session {
            state,
            is_anonymous,
            phone_number: None,
            partial_report: None,
        }
    }
}

/// Active dialogues. A key with no entry is idle.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionKey, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a dialogue, replacing any previous one for the key.
    pub fn begin(&mut self, key: SessionKey, session: Session) {
        self.sessions.insert(key, session);
    }

    pub fn get(&self, key: &SessionKey) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn get_mut(&mut self, key: &SessionKey) -> Option<&mut Session> {
        self.sessions.get_mut(key)
    }

    pub fn end(&mut self, key: &SessionKey) -> Option<Session> {
        self.sessions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
