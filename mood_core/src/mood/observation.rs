//! Raw mood observations and the log-store record format they arrive in.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// A single logged mood, as supplied by the external log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodObservation {
    pub timestamp: DateTime<Utc>,
    pub mood_label: String,
    pub intensity: u8,
}

impl MoodObservation {
    pub fn new(timestamp: DateTime<Utc>, mood_label: impl Into<String>, intensity: u8) -> Self {
        Self {
            timestamp,
            mood_label: mood_label.into(),
            intensity,
        }
    }
}

/// Wire record `{date, mood, intensity}` produced by the mood log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogRecord {
    pub date: String,
    pub mood: String,
    pub intensity: i64,
}

/// Reasons a [`MoodLogRecord`] cannot become a [`MoodObservation`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    InvalidDate { value: String },
    IntensityOutOfRange { value: i64 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidDate { value } => {
                write!(f, "Invalid record date '{}': expected ISO-8601", value)
            }
            RecordError::IntensityOutOfRange { value } => write!(
                f,
                "Intensity {} outside {}..={}",
                value, MIN_INTENSITY, MAX_INTENSITY
            ),
        }
    }
}

impl std::error::Error for RecordError {}

impl TryFrom<&MoodLogRecord> for MoodObservation {
    type Error = RecordError;

    fn try_from(record: &MoodLogRecord) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&record.date).ok_or_else(|| RecordError::InvalidDate {
            value: record.date.clone(),
        })?;
        let intensity = u8::try_from(record.intensity)
            .ok()
            .filter(|value| (MIN_INTENSITY..=MAX_INTENSITY).contains(value))
            .ok_or(RecordError::IntensityOutOfRange {
                value: record.intensity,
            })?;

        Ok(MoodObservation::new(timestamp, record.mood.clone(), intensity))
    }
}

/// Convert log-store records, skipping (and reporting) the malformed ones.
pub fn observations_from_records(records: &[MoodLogRecord]) -> Vec<MoodObservation> {
    records
        .iter()
        .filter_map(|record| match MoodObservation::try_from(record) {
            Ok(observation) => Some(observation),
            Err(err) => {
                tracing::warn!(mood = %record.mood, "skipping mood record: {err}");
                None
            }
        })
        .collect()
}

/// Parse RFC 3339 timestamps, offset-less date-times (read as UTC) and plain dates.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
