use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use teloxide::types::UserId;

use crate::texts::{ANONYMOUS_NAME, MISSING_USERNAME, PHONE_NOT_PROVIDED, VOICE_PLACEHOLDER};

const ANONYMOUS_MARKER: &str = "anonymous";

/// Numeric user id, or the `"anonymous"` marker on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReporterId", into = "RawReporterId")]
pub enum ReporterId {
    User(u64),
    Anonymous,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawReporterId {
    Id(u64),
    Marker(String),
}

impl From<ReporterId> for RawReporterId {
    fn from(id: ReporterId) -> Self {
        match id {
            ReporterId::User(id) => RawReporterId::Id(id),
            ReporterId::Anonymous => RawReporterId::Marker(ANONYMOUS_MARKER.to_string()),
        }
    }
}

impl TryFrom<RawReporterId> for ReporterId {
    type Error = String;

    fn try_from(raw: RawReporterId) -> Result<Self, Self::Error> {
        match raw {
            RawReporterId::Id(id) => Ok(ReporterId::User(id)),
            RawReporterId::Marker(marker) if marker == ANONYMOUS_MARKER => {
                Ok(ReporterId::Anonymous)
            }
            RawReporterId::Marker(other) => Err(format!("unknown reporter id {other:?}")),
        }
    }
}

/// The person talking to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reporter {
    pub user_id: UserId,
    pub username: Option<String>,
}

/// How the incident was described in the last dialogue step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Text(String),
    Voice { file_id: String },
}

/// Everything known about a report once the location has been given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub location: String,
    pub timestamp: String,
    pub reporter_id: ReporterId,
    pub reporter_name: String,
    pub phone_number: String,
}

/// One finished incident report. Field names match the lines of the report log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub location: String,
    pub timestamp: String,
    #[serde(rename = "user_id")]
    pub reporter_id: ReporterId,
    #[serde(rename = "username")]
    pub reporter_name: String,
    pub phone_number: String,
    pub description: String,
    #[serde(
        rename = "voice_file_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub voice_reference: Option<String>,
}

pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

impl ReportDraft {
    pub fn new(
        location: String,
        timestamp: String,
        reporter: &Reporter,
        is_anonymous: bool,
        phone_number: Option<String>,
    ) -> Self {
        let (reporter_id, reporter_name) = if is_anonymous {
            (ReporterId::Anonymous, ANONYMOUS_NAME.to_string())
        } else {
            (
                ReporterId::User(reporter.user_id.0),
                reporter
                    .username
                    .clone()
                    .unwrap_or_else(|| MISSING_USERNAME.to_string()),
            )
        };

        ReportDraft {
            location,
            timestamp,
            reporter_id,
            reporter_name,
            phone_number: phone_number.unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
        }
    }

    pub fn finish(self, description: Description) -> Report {
        let (description, voice_reference) = match description {
            Description::Text(text) => (text, None),
            Description::Voice { file_id } => (VOICE_PLACEHOLDER.to_string(), Some(file_id)),
        };

        Report {
            location: self.location,
            timestamp: self.timestamp,
            reporter_id: self.reporter_id,
            reporter_name: self.reporter_name,
            phone_number: self.phone_number,
            description,
            voice_reference,
        }
    }
}
