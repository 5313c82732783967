pub mod commands;
pub mod config;
pub mod context;
pub mod conversation;
pub mod inbound;
pub mod keyboards;
pub mod messenger;
pub mod notify;
pub mod report;
pub mod report_log;
pub mod session;
pub mod templates;
pub mod texts;
pub mod types;
pub mod webhook;
