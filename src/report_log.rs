use std::{
    error::Error,
    path::{Path, PathBuf},
};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::report::Report;

/// Append-only newline-delimited JSON file of finished reports.
#[derive(Debug, Clone)]
pub struct ReportLog {
    path: PathBuf,
}

impl ReportLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one line. The file is opened for this write only.
    pub async fn append(&self, report: &Report) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut line = serde_json::to_vec(report)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }

    /// Like `append`, but a failure is only logged.
    pub async fn record(&self, report: &Report) -> bool {
        match self.append(report).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to save report to {}: {}", self.path.display(), err);
                false
            }
        }
    }

    pub async fn read_all(&self) -> Result<Vec<Report>, Box<dyn Error + Send + Sync>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut reports = vec![];
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            reports.push(serde_json::from_str(line)?);
        }
        Ok(reports)
    }
}
