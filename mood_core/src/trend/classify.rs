//! Trend, mood state, sudden change and volatility classification.

use std::fmt;

use serde::Serialize;

use super::evaluate::ModelEvaluation;
use super::forecast::MoodDirection;
use super::smoothing::SmoothingStep;
use crate::config::ClassifierThresholds;

/// Bucketed magnitude and sign of the final Holt trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrength {
    StronglyImproving,
    SlightlyImproving,
    Stable,
    SlightlyDeclining,
    StronglyDeclining,
}

impl TrendStrength {
    pub const ALL: [TrendStrength; 5] = [
        TrendStrength::StronglyImproving,
        TrendStrength::SlightlyImproving,
        TrendStrength::Stable,
        TrendStrength::SlightlyDeclining,
        TrendStrength::StronglyDeclining,
    ];

    /// `|trend| > strong` is strong, `slight < |trend| <= strong` is slight,
    /// anything else is stable.
    pub fn classify(trend: f64, thresholds: &ClassifierThresholds) -> Self {
        let magnitude = trend.abs();
        if magnitude > thresholds.strong_trend {
            if trend > 0.0 {
                TrendStrength::StronglyImproving
            } else {
                TrendStrength::StronglyDeclining
            }
        } else if magnitude > thresholds.slight_trend {
            if trend > 0.0 {
                TrendStrength::SlightlyImproving
            } else {
                TrendStrength::SlightlyDeclining
            }
        } else {
            TrendStrength::Stable
        }
    }

    pub fn direction(&self) -> MoodDirection {
        match self {
            TrendStrength::StronglyImproving | TrendStrength::SlightlyImproving => {
                MoodDirection::Improving
            }
            TrendStrength::Stable => MoodDirection::Stable,
            TrendStrength::SlightlyDeclining | TrendStrength::StronglyDeclining => {
                MoodDirection::Declining
            }
        }
    }

    pub fn is_improving(&self) -> bool {
        self.direction() == MoodDirection::Improving
    }

    pub fn is_declining(&self) -> bool {
        self.direction() == MoodDirection::Declining
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStrength::StronglyImproving => "strongly_improving",
            TrendStrength::SlightlyImproving => "slightly_improving",
            TrendStrength::Stable => "stable",
            TrendStrength::SlightlyDeclining => "slightly_declining",
            TrendStrength::StronglyDeclining => "strongly_declining",
        }
    }
}

impl fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucket of the current smoothed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodState {
    Positive,
    Neutral,
    Negative,
}

impl MoodState {
    pub const ALL: [MoodState; 3] = [MoodState::Positive, MoodState::Neutral, MoodState::Negative];

    pub fn classify(level: f64, thresholds: &ClassifierThresholds) -> Self {
        if level > thresholds.positive_level {
            MoodState::Positive
        } else if level < thresholds.negative_level {
            MoodState::Negative
        } else {
            MoodState::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodState::Positive => "positive",
            MoodState::Neutral => "neutral",
            MoodState::Negative => "negative",
        }
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strictly greater than the threshold counts; equality does not.
pub fn is_sudden_change(actual: f64, forecast: f64, thresholds: &ClassifierThresholds) -> bool {
    (actual - forecast).abs() > thresholds.sudden_change
}

pub fn is_volatile(volatility: f64, thresholds: &ClassifierThresholds) -> bool {
    volatility > thresholds.volatility
}

/// Percentages (0..=100) of scores above the positive and below the negative cut.
pub fn score_shares(scores: &[f64], thresholds: &ClassifierThresholds) -> (f64, f64) {
    if scores.is_empty() {
        return (0.0, 0.0);
    }
    let total = scores.len() as f64;
    let positive = scores
        .iter()
        .filter(|&&score| score > thresholds.positive_score)
        .count();
    let negative = scores
        .iter()
        .filter(|&&score| score < thresholds.negative_score)
        .count();
    (
        positive as f64 / total * 100.0,
        negative as f64 / total * 100.0,
    )
}

/// Everything the classifier derives from one smoothed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub trend_value: f64,
    pub trend_strength: TrendStrength,
    pub current_level: f64,
    pub mood_state: MoodState,
    pub sudden_change: bool,
    pub is_volatile: bool,
    pub percent_positive: f64,
    pub percent_negative: f64,
}

/// Classify the final Holt state. Returns `None` for an empty series.
pub fn classify(
    scores: &[f64],
    holt: &[SmoothingStep],
    evaluation: &ModelEvaluation,
    thresholds: &ClassifierThresholds,
) -> Option<Classification> {
    let last = holt.last()?;
    let latest_score = *scores.last()?;
    let (percent_positive, percent_negative) = score_shares(scores, thresholds);

    Some(Classification {
        trend_value: last.trend,
        trend_strength: TrendStrength::classify(last.trend, thresholds),
        current_level: last.level,
        mood_state: MoodState::classify(last.level, thresholds),
        sudden_change: is_sudden_change(latest_score, last.one_step_forecast, thresholds),
        is_volatile: is_volatile(evaluation.volatility, thresholds),
        percent_positive,
        percent_negative,
    })
}
