use crate::error::AnalyzeError;
use crate::ir::UserCounts;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

pub const ERROR_HEADER: [&str; 2] = ["Error", "Count"];
pub const USER_HEADER: [&str; 3] = ["Username", "INFO", "ERROR"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRow {
    pub message: String,
    pub count: u64,
}

/// Error messages ordered by count, most frequent first.
///
/// Equal counts are ordered by message (byte-wise ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    pub rows: Vec<ErrorRow>,
}

impl ErrorReport {
    pub fn from_counts(counts: &BTreeMap<String, u64>) -> Self {
        let mut rows: Vec<ErrorRow> = counts
            .iter()
            .map(|(message, &count)| ErrorRow {
                message: message.clone(),
                count,
            })
            .collect();
        // Stable: the map already yields messages in ascending order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    /// Sum of all counts, i.e. the number of matched `ERROR` lines.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, row| acc.saturating_add(row.count))
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AnalyzeError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(ERROR_HEADER)?;
        for row in &self.rows {
            let count = row.count.to_string();
            wtr.write_record([row.message.as_str(), count.as_str()])?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub user: String,
    pub info: u64,
    pub error: u64,
}

/// Per-user tallies ordered by user name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserReport {
    pub rows: Vec<UserRow>,
}

impl UserReport {
    pub fn from_stats(stats: &BTreeMap<String, UserCounts>) -> Self {
        let rows = stats
            .iter()
            .map(|(user, counts)| UserRow {
                user: user.clone(),
                info: counts.info,
                error: counts.error,
            })
            .collect();
        Self { rows }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AnalyzeError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(USER_HEADER)?;
        for row in &self.rows {
            let info = row.info.to_string();
            let error = row.error.to_string();
            wtr.write_record([row.user.as_str(), info.as_str(), error.as_str()])?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
