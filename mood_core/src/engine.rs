//! Analysis façade tying the pipeline stages together.
//!
//! [`MoodTrendEngine`] holds only immutable configuration, so a single
//! instance can serve any number of callers and threads. Every call scores,
//! windows and smooths the supplied history from scratch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::mood::observation::{observations_from_records, MoodLogRecord, MoodObservation};
use crate::mood::score::{score_history, ScoredObservation};
use crate::trend::classify::{classify, MoodState, TrendStrength};
use crate::trend::evaluate::evaluate_models;
use crate::trend::forecast::{project, MoodDirection, FORECAST_HORIZON};
use crate::trend::period::{filter_period, Period};
use crate::trend::recommend::{select_guidance, Guidance, GuidanceSignals};
use crate::trend::shift::{detect_window_shift, WindowShift};
use crate::trend::smoothing::{holt_linear, simple_exponential};
use crate::trend::summary::{summarize, MoodSummary};

/// Fewest observations, after windowing, the trend model is fitted on.
pub const MIN_OBSERVATIONS: usize = 3;

/// Outcome of one analysis call.
///
/// Serializes with a `status` tag of `"insufficient_data"` or `"analyzed"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    InsufficientData(InsufficientData),
    Analyzed(Box<TrendAnalysis>),
}

impl AnalysisResult {
    pub fn status(&self) -> &'static str {
        match self {
            AnalysisResult::InsufficientData(_) => "insufficient_data",
            AnalysisResult::Analyzed(_) => "analyzed",
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, AnalysisResult::Analyzed(_))
    }

    pub fn analysis(&self) -> Option<&TrendAnalysis> {
        match self {
            AnalysisResult::Analyzed(analysis) => Some(analysis),
            AnalysisResult::InsufficientData(_) => None,
        }
    }

    pub fn period(&self) -> Period {
        match self {
            AnalysisResult::InsufficientData(data) => data.period,
            AnalysisResult::Analyzed(analysis) => analysis.period,
        }
    }

    pub fn observation_count(&self) -> usize {
        match self {
            AnalysisResult::InsufficientData(data) => data.observation_count,
            AnalysisResult::Analyzed(analysis) => analysis.observation_count,
        }
    }

    pub fn recommendation(&self) -> &str {
        match self {
            AnalysisResult::InsufficientData(data) => &data.recommendation,
            AnalysisResult::Analyzed(analysis) => &analysis.recommendation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsufficientData {
    pub message: String,
    pub recommendation: String,
    pub period: Period,
    pub observation_count: usize,
}

impl InsufficientData {
    fn empty_history(period: Period) -> Self {
        Self {
            message: "Need more mood entries for trend analysis".to_string(),
            recommendation: "Continue logging your moods daily to get personalized insights."
                .to_string(),
            period,
            observation_count: 0,
        }
    }

    fn sparse_window(period: Period, observation_count: usize) -> Self {
        Self {
            message: format!(
                "Need more mood entries in the selected {} for trend analysis",
                period
            ),
            recommendation:
                "Try selecting a longer time period or continue logging your moods regularly."
                    .to_string(),
            period,
            observation_count,
        }
    }
}

/// Model internals surfaced for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalData {
    pub forecast_horizon: usize,
    pub alpha: f64,
    pub beta: f64,
    pub mae: f64,
    pub simple_mae: f64,
    pub volatility: f64,
    pub use_trend_model: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub period: Period,
    pub observation_count: usize,
    pub current_mood_score: f64,
    pub trend_direction: f64,
    pub trend_strength: TrendStrength,
    pub mood_state: MoodState,
    pub sudden_change: bool,
    pub is_volatile: bool,
    pub forecasted_mood: f64,
    pub expected_mood_direction: MoodDirection,
    pub percent_positive: f64,
    pub percent_negative: f64,
    pub model_accuracy: f64,
    pub future_forecast: [f64; FORECAST_HORIZON],
    pub guidance: Guidance,
    pub insight: String,
    pub recommendation: String,
    pub activities: Vec<String>,
    pub technical: TechnicalData,
}

/// Stateless mood trend engine.
#[derive(Debug, Clone, Default)]
pub struct MoodTrendEngine {
    config: EngineConfig,
}

impl MoodTrendEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze `observations` over the `period` ending now.
    pub fn analyze(&self, observations: &[MoodObservation], period: Period) -> AnalysisResult {
        self.analyze_at(observations, period, Utc::now())
    }

    /// Analyze `observations` over the `period` ending at `now`.
    pub fn analyze_at(
        &self,
        observations: &[MoodObservation],
        period: Period,
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        if observations.is_empty() {
            return AnalysisResult::InsufficientData(InsufficientData::empty_history(period));
        }

        let scored = score_history(observations, &self.config.weights);
        let window = filter_period(&scored, period, now);
        tracing::debug!(
            %period,
            total = scored.len(),
            in_window = window.len(),
            "mood history windowed"
        );
        self.analyze_window(window, period)
    }

    /// Analyze raw log-store records; malformed records are skipped.
    pub fn analyze_records(
        &self,
        records: &[MoodLogRecord],
        period: Period,
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        let observations = observations_from_records(records);
        self.analyze_at(&observations, period, now)
    }

    /// Run the smoothing pipeline over an already windowed, time-ascending history.
    pub fn analyze_window(&self, window: &[ScoredObservation], period: Period) -> AnalysisResult {
        if window.len() < MIN_OBSERVATIONS {
            return AnalysisResult::InsufficientData(InsufficientData::sparse_window(
                period,
                window.len(),
            ));
        }

        let scores: Vec<f64> = window.iter().map(|item| item.score).collect();
        let constants = &self.config.smoothing;
        let holt = holt_linear(&scores, constants);
        let simple = simple_exponential(&scores, constants.alpha);
        let evaluation = evaluate_models(&scores, &holt, &simple);

        // `holt` is non-empty past the length guard, so the else branch never runs.
        let (Some(last), Some(classification)) = (
            holt.last(),
            classify(&scores, &holt, &evaluation, &self.config.thresholds),
        ) else {
            return AnalysisResult::InsufficientData(InsufficientData::sparse_window(
                period,
                window.len(),
            ));
        };
        let forecast = project(last);

        let guidance = select_guidance(&GuidanceSignals {
            is_volatile: classification.is_volatile,
            sudden_change: classification.sudden_change,
            mood_state: classification.mood_state,
            trend_strength: classification.trend_strength,
            expected_direction: forecast.expected_direction,
        });

        tracing::debug!(
            trend = classification.trend_value,
            strength = %classification.trend_strength,
            state = %classification.mood_state,
            holt_mae = evaluation.holt_mae,
            simple_mae = evaluation.simple_mae,
            ?guidance,
            "mood trend analyzed"
        );

        AnalysisResult::Analyzed(Box::new(TrendAnalysis {
            period,
            observation_count: scores.len(),
            current_mood_score: classification.current_level,
            trend_direction: classification.trend_value,
            trend_strength: classification.trend_strength,
            mood_state: classification.mood_state,
            sudden_change: classification.sudden_change,
            is_volatile: classification.is_volatile,
            forecasted_mood: forecast.horizon_value(),
            expected_mood_direction: forecast.expected_direction,
            percent_positive: classification.percent_positive,
            percent_negative: classification.percent_negative,
            model_accuracy: evaluation.model_accuracy,
            future_forecast: forecast.values,
            guidance,
            insight: guidance.insight().to_string(),
            recommendation: guidance.recommendation().to_string(),
            activities: guidance
                .activities()
                .iter()
                .map(|activity| activity.to_string())
                .collect(),
            technical: TechnicalData {
                forecast_horizon: FORECAST_HORIZON,
                alpha: constants.alpha,
                beta: constants.beta,
                mae: evaluation.holt_mae,
                simple_mae: evaluation.simple_mae,
                volatility: evaluation.volatility,
                use_trend_model: evaluation.use_trend_model,
            },
        }))
    }

    /// Daily statistics and category distribution over the `period` ending at `now`.
    pub fn summarize(
        &self,
        observations: &[MoodObservation],
        period: Period,
        now: DateTime<Utc>,
    ) -> Option<MoodSummary> {
        let scored = score_history(observations, &self.config.weights);
        summarize(filter_period(&scored, period, now), &self.config.weights)
    }

    /// Window-average shift over the configured trailing days ending at `now`.
    pub fn detect_shift(
        &self,
        observations: &[MoodObservation],
        now: DateTime<Utc>,
    ) -> Option<WindowShift> {
        let scored = score_history(observations, &self.config.weights);
        detect_window_shift(&scored, now, &self.config.shift)
    }
}

/// Analyze with the default configuration over the `period` ending now.
pub fn analyze_mood_trends(observations: &[MoodObservation], period: Period) -> AnalysisResult {
    MoodTrendEngine::default().analyze(observations, period)
}
