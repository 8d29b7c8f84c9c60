//! One-step-ahead error metrics used to judge the smoothing models.

use serde::Serialize;

use super::smoothing::SmoothingStep;

/// Width of the \[-1, 1] score range; the largest possible absolute error.
const SCORE_RANGE: f64 = 2.0;

/// Error statistics for the Holt and simple models over the same scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelEvaluation {
    pub holt_mae: f64,
    pub simple_mae: f64,
    /// Whether Holt beat the level-only baseline. Diagnostic only: the
    /// classifier and forecaster consume the Holt model either way.
    pub use_trend_model: bool,
    /// `1 - holt_mae / 2`, clamped to \[0, 1].
    pub model_accuracy: f64,
    /// Root mean square of the Holt one-step residuals.
    pub volatility: f64,
}

/// Residuals `s[t] - F[t]` for t >= 1. The first step has no forecast error.
pub fn residuals<'a>(
    scores: &'a [f64],
    steps: &'a [SmoothingStep],
) -> impl Iterator<Item = f64> + 'a {
    scores
        .iter()
        .zip(steps)
        .skip(1)
        .map(|(score, step)| score - step.one_step_forecast)
}

pub fn evaluate_models(
    scores: &[f64],
    holt: &[SmoothingStep],
    simple: &[SmoothingStep],
) -> ModelEvaluation {
    let holt_mae = mean(residuals(scores, holt).map(f64::abs));
    let simple_mae = mean(residuals(scores, simple).map(f64::abs));
    let volatility = mean(residuals(scores, holt).map(|r| r * r)).sqrt();

    ModelEvaluation {
        holt_mae,
        simple_mae,
        use_trend_model: holt_mae < simple_mae,
        model_accuracy: (1.0 - holt_mae / SCORE_RANGE).clamp(0.0, 1.0),
        volatility,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
