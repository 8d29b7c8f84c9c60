//! Descriptive statistics over daily mood averages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::mood::score::ScoredObservation;
use crate::mood::weights::{MoodCategory, MoodWeightTable};

const HALF_TREND_THRESHOLD: f64 = 0.1;

/// Spread of daily averages, bucketed by standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    VeryStable,
    RelativelyStable,
    SomewhatVariable,
    HighlyVariable,
    ExtremelyVariable,
}

impl Stability {
    pub fn from_std_dev(std_dev: f64) -> Self {
        if std_dev < 0.2 {
            Stability::VeryStable
        } else if std_dev < 0.3 {
            Stability::RelativelyStable
        } else if std_dev < 0.5 {
            Stability::SomewhatVariable
        } else if std_dev < 0.7 {
            Stability::HighlyVariable
        } else {
            Stability::ExtremelyVariable
        }
    }
}

/// Second-half versus first-half comparison of daily averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfTrend {
    Insufficient,
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl CategoryDistribution {
    fn record(&mut self, category: MoodCategory) {
        match category {
            MoodCategory::Positive => self.positive += 1,
            MoodCategory::Neutral => self.neutral += 1,
            MoodCategory::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub days: usize,
    pub daily_averages: Vec<(NaiveDate, f64)>,
    pub average: f64,
    pub std_dev: f64,
    pub range: f64,
    pub stability: Stability,
    pub half_trend: HalfTrend,
    pub distribution: CategoryDistribution,
}

/// Summarize a history; `None` when it is empty.
pub fn summarize(history: &[ScoredObservation], weights: &MoodWeightTable) -> Option<MoodSummary> {
    if history.is_empty() {
        return None;
    }

    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    let mut distribution = CategoryDistribution::default();
    for item in history {
        let entry = by_day.entry(item.timestamp.date_naive()).or_insert((0.0, 0));
        entry.0 += item.score;
        entry.1 += 1;
        distribution.record(weights.category(&item.mood_label));
    }

    let daily_averages: Vec<(NaiveDate, f64)> = by_day
        .into_iter()
        .map(|(day, (total, count))| (day, total / count as f64))
        .collect();
    let values: Vec<f64> = daily_averages.iter().map(|(_, value)| *value).collect();

    let days = values.len() as f64;
    let average = values.iter().sum::<f64>() / days;
    let variance = values
        .iter()
        .map(|value| (value - average).powi(2))
        .sum::<f64>()
        / days;
    let std_dev = variance.sqrt();
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    Some(MoodSummary {
        days: values.len(),
        average,
        std_dev,
        range: max - min,
        stability: Stability::from_std_dev(std_dev),
        half_trend: half_trend(&values),
        distribution,
        daily_averages,
    })
}

fn half_trend(values: &[f64]) -> HalfTrend {
    if values.len() <= 2 {
        return HalfTrend::Insufficient;
    }
    let (first, second) = values.split_at(values.len() / 2);
    let mean = |half: &[f64]| half.iter().sum::<f64>() / half.len() as f64;
    let difference = mean(second) - mean(first);

    if difference.abs() < HALF_TREND_THRESHOLD {
        HalfTrend::Stable
    } else if difference > 0.0 {
        HalfTrend::Improving
    } else {
        HalfTrend::Declining
    }
}
