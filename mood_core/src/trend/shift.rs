//! Window-average shift detection for mood notifications.
//!
//! Compares the mean score of the most recent observations against the mean
//! of the block just before them. A large enough swing produces a
//! [`ShiftNotice`]; delivering and dismissing it is the caller's business.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::ShiftConfig;
use crate::mood::score::ScoredObservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Positive,
    Stable,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    PositiveReinforcement,
    MoodShift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    High,
}

/// Result of comparing the current and previous averaging windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowShift {
    pub kind: ShiftKind,
    pub current_average: f64,
    /// Zero when there were no observations before the current window.
    pub previous_average: f64,
    pub delta: f64,
    pub window: usize,
    pub observations: usize,
}

/// Notification suggested for a detected shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftNotice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub message: String,
    pub cooldown_hours: i64,
}

impl WindowShift {
    /// Notice for a positive or negative shift; stable shifts produce none.
    pub fn notice(&self) -> Option<ShiftNotice> {
        match self.kind {
            ShiftKind::Positive => Some(ShiftNotice {
                kind: NoticeKind::PositiveReinforcement,
                severity: Severity::Low,
                message: "Your mood has shown consistent improvement!".to_string(),
                cooldown_hours: 24,
            }),
            ShiftKind::Negative => Some(ShiftNotice {
                kind: NoticeKind::MoodShift,
                severity: Severity::High,
                message: "We noticed a significant mood shift".to_string(),
                cooldown_hours: 12,
            }),
            ShiftKind::Stable => None,
        }
    }
}

impl ShiftNotice {
    pub fn cooldown(&self) -> Duration {
        Duration::hours(self.cooldown_hours)
    }

    /// Whether a notice of this kind may be sent again, given when the last
    /// one of the same kind went out.
    pub fn is_due(&self, last_sent: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_sent {
            None => true,
            Some(sent) => now.signed_duration_since(sent) > self.cooldown(),
        }
    }
}

/// Detect a shift over a time-ascending history.
///
/// Returns `None` when fewer than `config.min_observations` fall inside the
/// trailing `config.window_days`.
pub fn detect_window_shift(
    history: &[ScoredObservation],
    now: DateTime<Utc>,
    config: &ShiftConfig,
) -> Option<WindowShift> {
    let cutoff = Duration::try_days(config.window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let start = history.partition_point(|item| item.timestamp < cutoff);
    let recent: Vec<f64> = history[start..].iter().map(|item| item.score).collect();

    let count = recent.len();
    if count < config.min_observations.max(1) {
        return None;
    }

    let window = config.max_window.max(1).min(count);
    let current = &recent[count - window..];
    let previous = &recent[count.saturating_sub(2 * window)..count - window];

    let current_average = average(current);
    let previous_average = if previous.is_empty() {
        0.0
    } else {
        average(previous)
    };
    let delta = current_average - previous_average;

    let kind = if delta >= config.delta {
        ShiftKind::Positive
    } else if delta <= -config.delta {
        ShiftKind::Negative
    } else {
        ShiftKind::Stable
    };

    tracing::debug!(
        ?kind,
        current_average,
        previous_average,
        observations = count,
        "window shift evaluated"
    );

    Some(WindowShift {
        kind,
        current_average,
        previous_average,
        delta,
        window,
        observations: count,
    })
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
