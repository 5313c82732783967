use std::{env, path::PathBuf};

use teloxide::types::ChatId;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REPORTS_FILE: &str = "reports.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Can't read {0} from env")]
    Missing(&'static str),
    #[error("Invalid admin id {0:?} in ADMIN_IDS")]
    AdminId(String),
    #[error("Invalid PORT {0:?}")]
    Port(String),
    #[error("Invalid WEBHOOK_URL: {0}")]
    WebhookUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub admin_ids: Vec<ChatId>,
    pub webhook_url: String,
    pub port: u16,
    pub reports_file: PathBuf,
    pub strict_webhook_methods: bool,
    pub sentry_url: Option<String>,
}

fn read_required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Parses a comma separated list of numeric chat ids, skipping blank items.
pub fn parse_admin_ids(raw: &str) -> Result<Vec<ChatId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map(ChatId)
                .map_err(|_| ConfigError::AdminId(item.to_string()))
        })
        .collect()
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = read_required(&lookup, "BOT_TOKEN")?;
        let webhook_url = read_required(&lookup, "WEBHOOK_URL")?
            .trim_end_matches('/')
            .to_string();
        Url::parse(&webhook_url)?;

        let admin_ids = parse_admin_ids(&lookup("ADMIN_IDS").unwrap_or_default())?;

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Port(raw))?,
            _ => DEFAULT_PORT,
        };

        let reports_file = lookup("REPORTS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_FILE));

        let strict_webhook_methods = lookup("WEBHOOK_STRICT_METHODS")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let sentry_url = lookup("SENTRY_URL").filter(|value| !value.trim().is_empty());

        Ok(Config {
            bot_token,
            admin_ids,
            webhook_url,
            port,
            reports_file,
            strict_webhook_methods,
            sentry_url,
        })
    }

    /// Full URL the platform pushes updates to.
    pub fn webhook_endpoint(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&format!("{}/{}", self.webhook_url, self.bot_token))?)
    }
}
