pub mod cancel;
pub mod question;
pub mod report;
pub mod start;
