//! Mood label weight table.
//!
//! Every label maps to a signed base weight in \[-1, 1] and a coarse
//! [`MoodCategory`]. The default table carries both the analysis vocabulary
//! (`joy`, `grief`, ...) and the logging vocabulary (`happy`, `sad`, ...);
//! each logging label reuses the weight of its analysis counterpart.
//! Labels missing from the table weigh 0 and fall into the neutral category.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse grouping of mood labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 3] = [
        MoodCategory::Positive,
        MoodCategory::Neutral,
        MoodCategory::Negative,
    ];

    /// Category implied by a bare weight, used for labels added from configuration.
    pub fn from_weight(weight: f64) -> Self {
        if weight > 0.3 {
            MoodCategory::Positive
        } else if weight < -0.3 {
            MoodCategory::Negative
        } else {
            MoodCategory::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "positive",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Negative => "negative",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(MoodCategory::Positive),
            "neutral" => Ok(MoodCategory::Neutral),
            "negative" => Ok(MoodCategory::Negative),
            _ => Err(format!("unsupported mood category '{}'", s)),
        }
    }
}

/// Weight and category registered for a single label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodWeight {
    pub weight: f64,
    pub category: MoodCategory,
}

// (label, weight, category)
const ANALYSIS_VOCABULARY: &[(&str, f64, MoodCategory)] = &[
    ("admiration", 0.7, MoodCategory::Positive),
    ("amusement", 0.6, MoodCategory::Positive),
    ("approval", 0.5, MoodCategory::Positive),
    ("caring", 0.5, MoodCategory::Positive),
    ("excitement", 0.8, MoodCategory::Positive),
    ("gratitude", 0.6, MoodCategory::Positive),
    ("joy", 0.9, MoodCategory::Positive),
    ("love", 0.8, MoodCategory::Positive),
    ("optimism", 0.7, MoodCategory::Positive),
    ("pride", 0.6, MoodCategory::Positive),
    ("relief", 0.5, MoodCategory::Positive),
    ("neutral", 0.0, MoodCategory::Neutral),
    ("surprise", 0.1, MoodCategory::Neutral),
    ("curiosity", 0.2, MoodCategory::Neutral),
    ("realization", 0.2, MoodCategory::Neutral),
    ("desire", 0.3, MoodCategory::Neutral),
    ("confusion", -0.1, MoodCategory::Neutral),
    ("nervousness", -0.2, MoodCategory::Neutral),
    ("anger", -0.8, MoodCategory::Negative),
    ("annoyance", -0.5, MoodCategory::Negative),
    ("disappointment", -0.6, MoodCategory::Negative),
    ("disapproval", -0.5, MoodCategory::Negative),
    ("disgust", -0.7, MoodCategory::Negative),
    ("embarrassment", -0.4, MoodCategory::Negative),
    ("fear", -0.7, MoodCategory::Negative),
    ("grief", -0.9, MoodCategory::Negative),
    ("remorse", -0.6, MoodCategory::Negative),
    ("sadness", -0.8, MoodCategory::Negative),
];

// Logging label -> analysis label whose weight it shares, plus its own category.
const LOGGING_ALIASES: &[(&str, &str, MoodCategory)] = &[
    ("happy", "joy", MoodCategory::Positive),
    ("excited", "excitement", MoodCategory::Positive),
    ("loving", "love", MoodCategory::Positive),
    ("optimistic", "optimism", MoodCategory::Positive),
    ("proud", "pride", MoodCategory::Positive),
    ("grateful", "gratitude", MoodCategory::Positive),
    ("relieved", "relief", MoodCategory::Positive),
    ("calm", "relief", MoodCategory::Positive),
    ("amused", "amusement", MoodCategory::Positive),
    ("surprised", "surprise", MoodCategory::Neutral),
    ("curious", "curiosity", MoodCategory::Neutral),
    ("confused", "confusion", MoodCategory::Neutral),
    ("nervous", "nervousness", MoodCategory::Negative),
    ("anxious", "fear", MoodCategory::Negative),
    ("sad", "sadness", MoodCategory::Negative),
    ("angry", "anger", MoodCategory::Negative),
    ("annoyed", "annoyance", MoodCategory::Negative),
    ("disappointed", "disappointment", MoodCategory::Negative),
    ("disapproving", "disapproval", MoodCategory::Negative),
    ("disgusted", "disgust", MoodCategory::Negative),
    ("embarrassed", "embarrassment", MoodCategory::Negative),
    ("grieving", "grief", MoodCategory::Negative),
    ("remorseful", "remorse", MoodCategory::Negative),
];

/// Lookup table from mood label to base weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodWeightTable {
    entries: BTreeMap<String, MoodWeight>,
}

impl MoodWeightTable {
    /// Table with no labels; every lookup falls back to the neutral default.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register or replace a label. The weight is clamped to \[-1, 1].
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        weight: f64,
        category: MoodCategory,
    ) -> Option<MoodWeight> {
        let weight = if weight.is_finite() {
            weight.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self.entries
            .insert(label.into(), MoodWeight { weight, category })
    }

    /// Builder-style insert that derives the category from the weight.
    pub fn with_weight(mut self, label: impl Into<String>, weight: f64) -> Self {
        self.insert(label, weight, MoodCategory::from_weight(weight));
        self
    }

    /// Override the weight of a label, keeping its category when already known.
    pub fn set_weight(&mut self, label: &str, weight: f64) {
        let category = self
            .entries
            .get(label)
            .map(|entry| entry.category)
            .unwrap_or_else(|| MoodCategory::from_weight(weight));
        self.insert(label, weight, category);
    }

    pub fn get(&self, label: &str) -> Option<&MoodWeight> {
        self.entries.get(label)
    }

    /// Base weight for `label`; unknown labels weigh 0.
    pub fn weight(&self, label: &str) -> f64 {
        self.entries.get(label).map_or(0.0, |entry| entry.weight)
    }

    /// Category for `label`; unknown labels are neutral.
    pub fn category(&self, label: &str) -> MoodCategory {
        self.entries
            .get(label)
            .map_or(MoodCategory::Neutral, |entry| entry.category)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MoodWeight)> {
        self.entries
            .iter()
            .map(|(label, entry)| (label.as_str(), entry))
    }
}

impl Default for MoodWeightTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for &(label, weight, category) in ANALYSIS_VOCABULARY {
            table.insert(label, weight, category);
        }
        for &(label, canonical, category) in LOGGING_ALIASES {
            let weight = table.weight(canonical);
            table.insert(label, weight, category);
        }
        table
    }
}
