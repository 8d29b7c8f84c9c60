//! JSON line-delimited audit log of analysis runs.
//!
//! Logging is opt-in: the engine itself never touches the filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use uuid::Uuid;

use crate::engine::AnalysisResult;
use crate::trend::classify::{MoodState, TrendStrength};
use crate::trend::period::Period;
use crate::trend::recommend::Guidance;

pub const ANALYSIS_LOG_FILE: &str = "analysis.jsonl";

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value).map_err(io::Error::other)?;
    file.write_all(b"\n")
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisLogEntry {
    pub run_id: Uuid,
    pub status: &'static str,
    pub period: Period,
    pub observation_count: usize,
    pub current_mood_score: Option<f64>,
    pub trend_strength: Option<TrendStrength>,
    pub mood_state: Option<MoodState>,
    pub sudden_change: Option<bool>,
    pub is_volatile: Option<bool>,
    pub model_accuracy: Option<f64>,
    pub guidance: Option<Guidance>,
    pub timestamp_ms: u128,
}

impl AnalysisLogEntry {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let analysis = result.analysis();
        Self {
            run_id: Uuid::new_v4(),
            status: result.status(),
            period: result.period(),
            observation_count: result.observation_count(),
            current_mood_score: analysis.map(|a| a.current_mood_score),
            trend_strength: analysis.map(|a| a.trend_strength),
            mood_state: analysis.map(|a| a.mood_state),
            sudden_change: analysis.map(|a| a.sudden_change),
            is_volatile: analysis.map(|a| a.is_volatile),
            model_accuracy: analysis.map(|a| a.model_accuracy),
            guidance: analysis.map(|a| a.guidance),
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        }
    }
}

/// Append a summary of `result` to `<dir>/analysis.jsonl`, creating `dir` if needed.
pub fn log_analysis_to<P: AsRef<Path>>(dir: P, result: &AnalysisResult) -> io::Result<()> {
    fs::create_dir_all(&dir)?;
    let entry = AnalysisLogEntry::from_result(result);
    append_json_line(dir.as_ref().join(ANALYSIS_LOG_FILE), &entry)
}

/// Append a summary of `result` to `logs/analysis.jsonl`.
pub fn log_analysis(result: &AnalysisResult) -> io::Result<()> {
    log_analysis_to("logs", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoodTrendEngine;
    use crate::mood::observation::MoodObservation;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn appends_one_line_per_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let observations: Vec<MoodObservation> = (1..=4)
            .map(|day| MoodObservation::new(now - Duration::days(day), "happy", 6))
            .collect();
        let engine = MoodTrendEngine::default();

        let analyzed = engine.analyze_at(&observations, Period::Week, now);
        let sparse = engine.analyze_at(&observations[..1], Period::Week, now);
        log_analysis_to(dir.path(), &analyzed).unwrap();
        log_analysis_to(dir.path(), &sparse).unwrap();

        let contents = fs::read_to_string(dir.path().join(ANALYSIS_LOG_FILE)).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["status"], "analyzed");
        assert_eq!(lines[0]["observation_count"], 4);
        assert_eq!(lines[0]["mood_state"], "positive");
        assert_eq!(lines[1]["status"], "insufficient_data");
        assert!(lines[1]["trend_strength"].is_null());
        assert_ne!(lines[0]["run_id"], lines[1]["run_id"]);
    }
}
