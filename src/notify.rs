use teloxide::types::ChatId;

use crate::{messenger::Messenger, report::Report};

/// Administrator chats, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRoster(Vec<ChatId>);

impl AdminRoster {
    pub fn new(admins: Vec<ChatId>) -> Self {
        Self(admins)
    }

    pub fn iter(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutSummary {
    pub attempts: usize,
    pub failures: usize,
}

impl FanOutSummary {
    fn track<E: std::fmt::Display>(&mut self, result: Result<(), E>, what: &str, admin: ChatId) {
        self.attempts += 1;
        if let Err(err) = result {
            self.failures += 1;
            log::error!("Failed to send {} to admin {}: {}", what, admin.0, err);
        }
    }
}

/// Sends `text` to every admin; a failed send does not stop the rest.
pub async fn broadcast_text(
    messenger: &dyn Messenger,
    roster: &AdminRoster,
    text: &str,
    what: &str,
) -> FanOutSummary {
    let mut summary = FanOutSummary::default();
    for admin in roster.iter() {
        let result = messenger.send_text(admin, text.to_string(), None).await;
        summary.track(result, what, admin);
    }
    summary
}

/// Sends the rendered report to every admin, followed by the voice note if
/// the report has one.
pub async fn broadcast_report(
    messenger: &dyn Messenger,
    roster: &AdminRoster,
    report: &Report,
    text: &str,
) -> FanOutSummary {
    let mut summary = FanOutSummary::default();
    for admin in roster.iter() {
        let result = messenger.send_text(admin, text.to_string(), None).await;
        summary.track(result, "report", admin);

        if let Some(file_id) = &report.voice_reference {
            let result = messenger.send_voice(admin, file_id.clone()).await;
            summary.track(result, "voice report", admin);
        }
    }
    summary
}
