//! Mapping observations onto the signed \[-1, 1] mood score scale.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::observation::{MoodObservation, MAX_INTENSITY, MIN_INTENSITY};
use super::weights::MoodWeightTable;

/// Observation with its normalized score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredObservation {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub mood_label: String,
    pub intensity: u8,
}

/// `score = weight(label) * intensity / 10`.
///
/// Intensity is clamped to 1..=10 so the score cannot leave \[-1, 1].
pub fn score_observation(
    observation: &MoodObservation,
    weights: &MoodWeightTable,
) -> ScoredObservation {
    let intensity = observation.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    let score = weights.weight(&observation.mood_label) * (f64::from(intensity) / 10.0);

    ScoredObservation {
        timestamp: observation.timestamp,
        score,
        mood_label: observation.mood_label.clone(),
        intensity,
    }
}

/// Score every observation and order the result oldest first.
///
/// The sort is stable: observations sharing a timestamp keep insertion order.
pub fn score_history(
    observations: &[MoodObservation],
    weights: &MoodWeightTable,
) -> Vec<ScoredObservation> {
    let mut scored: Vec<ScoredObservation> = observations
        .iter()
        .map(|observation| score_observation(observation, weights))
        .collect();
    scored.sort_by_key(|item| item.timestamp);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_day(day: u32, label: &str, intensity: u8) -> MoodObservation {
        MoodObservation::new(
            Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap(),
            label,
            intensity,
        )
    }

    #[test]
    fn score_is_weight_times_intensity_fraction() {
        let table = MoodWeightTable::default();
        let scored = score_observation(&at_day(1, "joy", 10), &table);
        assert!((scored.score - 0.9).abs() < 1e-12);

        let scored = score_observation(&at_day(1, "sad", 3), &table);
        assert!((scored.score + 0.24).abs() < 1e-12);
    }

    #[test]
    fn unknown_label_scores_zero() {
        let table = MoodWeightTable::default();
        let scored = score_observation(&at_day(1, "flabbergasted", 9), &table);
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn synthetic_table_drives_scores() {
        let table = MoodWeightTable::empty().with_weight("up", 0.5);
        assert!((score_observation(&at_day(1, "up", 4), &table).score - 0.2).abs() < 1e-12);
        assert_eq!(score_observation(&at_day(1, "joy", 4), &table).score, 0.0);
    }

    #[test]
    fn out_of_contract_intensity_is_clamped() {
        let table = MoodWeightTable::empty().with_weight("max", 1.0);
        let scored = score_observation(&at_day(1, "max", 200), &table);
        assert_eq!(scored.intensity, 10);
        assert!((scored.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn history_is_sorted_oldest_first() {
        let table = MoodWeightTable::default();
        let observations = vec![at_day(3, "joy", 5), at_day(1, "sad", 5), at_day(2, "calm", 5)];
        let scored = score_history(&observations, &table);
        let labels: Vec<&str> = scored.iter().map(|s| s.mood_label.as_str()).collect();
        assert_eq!(labels, vec!["sad", "calm", "joy"]);
    }
}
