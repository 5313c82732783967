use std::sync::Arc;

use tera::Tera;

use crate::{messenger::Messenger, notify::AdminRoster, report_log::ReportLog};

/// Long-lived dependencies shared by every handler.
pub struct BotContext {
    /// Without the `@`; commands addressed to other bots are not ours.
    pub bot_username: String,
    pub messenger: Arc<dyn Messenger>,
    pub roster: AdminRoster,
    pub tera: Tera,
    pub reports: ReportLog,
}
