use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification token of a ticky log line.
///
/// Only `INFO` and `ERROR` drive counters. Any other token is kept verbatim in
/// [`Severity::Other`] so it can still be reported, but it never maps onto a
/// counter of [`UserCounts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Severity {
    Info,
    Error,
    Other(String),
}

impl Severity {
    /// Maps a captured token onto a severity. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Self {
        Self::from(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Other(token) => token,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Severity {
    fn from(token: String) -> Self {
        match token.as_str() {
            "INFO" => Severity::Info,
            "ERROR" => Severity::Error,
            _ => Severity::Other(token),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

/// A structured record extracted from one matched log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub severity: Severity,
    pub message: String,
    pub user: String,
}

/// Per-user tallies. The record has exactly two counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounts {
    pub info: u64,
    pub error: u64,
}

impl UserCounts {
    pub fn new(info: u64, error: u64) -> Self {
        Self { info, error }
    }

    /// Bumps the counter matching `severity`. Unrecognised severities are a no-op.
    pub fn record(&mut self, severity: &Severity) {
        match severity {
            Severity::Info => self.info = self.info.saturating_add(1),
            Severity::Error => self.error = self.error.saturating_add(1),
            Severity::Other(_) => {}
        }
    }

    pub fn absorb(&mut self, other: UserCounts) {
        self.info = self.info.saturating_add(other.info);
        self.error = self.error.saturating_add(other.error);
    }
}
