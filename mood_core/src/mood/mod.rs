//! Mood observations, label weights and score mapping.

pub mod observation;
pub mod score;
pub mod weights;

pub use observation::{
    observations_from_records, parse_timestamp, MoodLogRecord, MoodObservation, RecordError,
};
pub use score::{score_history, score_observation, ScoredObservation};
pub use weights::{MoodCategory, MoodWeight, MoodWeightTable};
