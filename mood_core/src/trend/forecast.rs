//! Short-horizon projection from the final Holt state.

use std::cmp::Ordering;

use serde::Serialize;

use super::smoothing::SmoothingStep;

/// Number of future periods projected.
pub const FORECAST_HORIZON: usize = 3;

/// Direction of movement, shared by trend buckets and forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodDirection {
    Improving,
    Stable,
    Declining,
}

impl MoodDirection {
    pub const ALL: [MoodDirection; 3] = [
        MoodDirection::Improving,
        MoodDirection::Stable,
        MoodDirection::Declining,
    ];

    /// Direction of `target` relative to `baseline`; exact equality is stable.
    pub fn between(baseline: f64, target: f64) -> Self {
        match target.partial_cmp(&baseline) {
            Some(Ordering::Greater) => MoodDirection::Improving,
            Some(Ordering::Less) => MoodDirection::Declining,
            Some(Ordering::Equal) | None => MoodDirection::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodDirection::Improving => "improving",
            MoodDirection::Stable => "stable",
            MoodDirection::Declining => "declining",
        }
    }
}

/// Projected scores for the next [`FORECAST_HORIZON`] periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    pub values: [f64; FORECAST_HORIZON],
    pub expected_direction: MoodDirection,
}

impl Forecast {
    /// Projection for the last period of the horizon.
    pub fn horizon_value(&self) -> f64 {
        self.values[FORECAST_HORIZON - 1]
    }
}

/// `values[i] = L + (i + 1) * T`; direction compares the last value with `L`.
pub fn project(last: &SmoothingStep) -> Forecast {
    let values: [f64; FORECAST_HORIZON] = std::array::from_fn(|i| last.project(i + 1));
    Forecast {
        values,
        expected_direction: MoodDirection::between(last.level, values[FORECAST_HORIZON - 1]),
    }
}
