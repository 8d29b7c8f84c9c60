//! Trailing analysis windows.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::score::ScoredObservation;

/// Trailing window the analysis is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::Year, Period::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Parse a period token, falling back to [`Period::Week`] for unknown input.
    pub fn parse_lenient(token: &str) -> Self {
        token.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}; defaulting to week");
            Period::Week
        })
    }

    /// Earliest timestamp kept for this period, or `None` when nothing is cut.
    ///
    /// Months are calendar months; a date missing from the target month
    /// clamps to that month's last day.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let cutoff = match self {
            Period::Week => now.checked_sub_signed(Duration::days(7)),
            Period::Month => now.checked_sub_months(Months::new(1)),
            Period::Year => now.checked_sub_months(Months::new(12)),
            Period::All => return None,
        };
        Some(cutoff.unwrap_or(DateTime::<Utc>::MIN_UTC))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "all" => Ok(Period::All),
            _ => Err(format!("unsupported period '{}'", s)),
        }
    }
}

/// Suffix of a time-ascending history that falls inside `period`.
pub fn filter_period(
    history: &[ScoredObservation],
    period: Period,
    now: DateTime<Utc>,
) -> &[ScoredObservation] {
    match period.cutoff(now) {
        Some(cutoff) => {
            let start = history.partition_point(|item| item.timestamp < cutoff);
            &history[start..]
        }
        None => history,
    }
}
