use thiserror::Error;

/// Failures surfaced while reading a log or writing a report.
///
/// Unmatched lines are never errors; they are skipped by the classifier.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read log input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write report: {0}")]
    Write(#[from] csv::Error),
}

impl AnalyzeError {
    pub fn is_read(&self) -> bool {
        matches!(self, AnalyzeError::Read(_))
    }
}
