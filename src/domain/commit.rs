use chrono::{DateTime, FixedOffset, TimeZone};

/// A single commit as seen by the changelog pipeline.
///
/// Only the message and the author timestamp matter here; hashes and
/// authors stay with the history collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl CommitRecord {
    pub fn new(message: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        CommitRecord {
            message: message.into(),
            timestamp,
        }
    }

    /// Build a record from seconds since the epoch and an offset in minutes,
    /// the representation git stores for author signatures.
    ///
    /// Returns `None` when the pair does not describe a valid instant.
    pub fn from_epoch(message: impl Into<String>, seconds: i64, offset_minutes: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(offset_minutes.checked_mul(60)?)?;
        let timestamp = offset.timestamp_opt(seconds, 0).single()?;
        Some(CommitRecord::new(message, timestamp))
    }

    /// Whether the message contains `marker` as a literal, case-sensitive substring
    pub fn contains(&self, marker: &str) -> bool {
        self.message.contains(marker)
    }
}
