//! # Mood Core
//!
//! A deterministic engine for mood trend analysis and short-horizon
//! forecasting. Logged moods are mapped onto a signed \[-1, 1] score, smoothed
//! with Holt's linear trend method (against a level-only baseline), classified
//! into trend, state, sudden-change and volatility signals, projected three
//! periods ahead, and matched against a decision table of guidance.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use mood_core::{MoodObservation, MoodTrendEngine, Period};
//!
//! let now = Utc::now();
//! let observations: Vec<MoodObservation> = (5..=9u8)
//!     .map(|intensity| {
//!         MoodObservation::new(now - Duration::days(10 - i64::from(intensity)), "happy", intensity)
//!     })
//!     .collect();
//!
//! let engine = MoodTrendEngine::default();
//! let result = engine.analyze_at(&observations, Period::All, now);
//! if let Some(analysis) = result.analysis() {
//!     println!("{} / {}", analysis.mood_state, analysis.trend_strength);
//! }
//! ```
//!
//! ## Core Modules
//!
//! - [`config`] - Engine configuration via TOML
//! - [`mood`] - Observations, label weights and score mapping
//! - [`trend`] - Smoothing, classification, forecasting and guidance
//! - [`engine`] - The analysis façade
//! - [`logging`] - JSON line-delimited analysis log

pub mod config;
pub mod engine;
pub mod logging;
pub mod mood;
pub mod trend;

pub use config::{ClassifierThresholds, ConfigError, EngineConfig, ShiftConfig, SmoothingConstants};
pub use engine::{
    analyze_mood_trends, AnalysisResult, InsufficientData, MoodTrendEngine, TechnicalData,
    TrendAnalysis, MIN_OBSERVATIONS,
};
pub use mood::{
    observations_from_records, score_history, score_observation, MoodCategory, MoodLogRecord,
    MoodObservation, MoodWeight, MoodWeightTable, RecordError, ScoredObservation,
};
pub use trend::{
    detect_window_shift, holt_linear, simple_exponential, summarize, Classification, Forecast,
    Guidance, GuidanceSignals, ModelEvaluation, MoodDirection, MoodState, MoodSummary, Period,
    Recommendation, ShiftNotice, SmoothingStep, TrendStrength, WindowShift, FORECAST_HORIZON,
};
