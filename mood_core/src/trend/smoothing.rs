//! Exponential smoothing recursions over a mood score series.
//!
//! Both models are expressed as a scan over the scores that carries the
//! previous [`SmoothingStep`] forward, producing exactly one step per score.

use serde::Serialize;

use crate::config::SmoothingConstants;

/// Model state after consuming one score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothingStep {
    pub level: f64,
    pub trend: f64,
    /// Prediction of this step's score made from the previous step.
    /// For the first step this equals the level.
    pub one_step_forecast: f64,
}

impl SmoothingStep {
    /// Value projected `periods` steps ahead of this state.
    pub fn project(&self, periods: usize) -> f64 {
        self.level + periods as f64 * self.trend
    }
}

/// Simple (level-only) exponential smoothing. `trend` is always zero.
pub fn simple_exponential(scores: &[f64], alpha: f64) -> Vec<SmoothingStep> {
    let Some((&first, rest)) = scores.split_first() else {
        return Vec::new();
    };

    let origin = SmoothingStep {
        level: first,
        trend: 0.0,
        one_step_forecast: first,
    };

    std::iter::once(origin)
        .chain(rest.iter().scan(origin, |prev, &score| {
            let step = SmoothingStep {
                level: alpha * score + (1.0 - alpha) * prev.level,
                trend: 0.0,
                one_step_forecast: prev.level,
            };
            *prev = step;
            Some(step)
        }))
        .collect()
}

/// Holt's linear trend smoothing.
///
/// The initial trend is the first difference `s[1] - s[0]` (zero for a single
/// score).
pub fn holt_linear(scores: &[f64], constants: &SmoothingConstants) -> Vec<SmoothingStep> {
    let Some((&first, rest)) = scores.split_first() else {
        return Vec::new();
    };
    let SmoothingConstants { alpha, beta } = *constants;

    let origin = SmoothingStep {
        level: first,
        trend: rest.first().map_or(0.0, |&second| second - first),
        one_step_forecast: first,
    };

    std::iter::once(origin)
        .chain(rest.iter().scan(origin, |prev, &score| {
            let forecast = prev.project(1);
            let level = alpha * score + (1.0 - alpha) * forecast;
            let trend = beta * (level - prev.level) + (1.0 - beta) * prev.trend;
            let step = SmoothingStep {
                level,
                trend,
                one_step_forecast: forecast,
            };
            *prev = step;
            Some(step)
        }))
        .collect()
}
