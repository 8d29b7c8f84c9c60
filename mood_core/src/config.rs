//! Engine configuration management via TOML files.
//!
//! Every tunable of the analysis pipeline has a compiled-in default. A TOML
//! document may override any subset of them:
//!
//! ```toml
//! [smoothing]
//! alpha = 0.3
//! beta = 0.1
//!
//! [thresholds]
//! sudden_change = 0.6
//!
//! [shift]
//! window_days = 7
//!
//! [weights]
//! replace_defaults = false
//! serene = 0.6
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mood::weights::MoodWeightTable;

/// Smoothing factors for the level (`alpha`) and trend (`beta`) recursions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConstants {
    pub alpha: f64,
    pub beta: f64,
}

impl SmoothingConstants {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, ConfigError> {
        let constants = Self { alpha, beta };
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !unit_interval(self.alpha) {
            return Err(ConfigError::Parse(
                "smoothing.alpha must be in (0, 1]".into(),
            ));
        }
        if !unit_interval(self.beta) {
            return Err(ConfigError::Parse("smoothing.beta must be in (0, 1]".into()));
        }
        Ok(())
    }
}

impl Default for SmoothingConstants {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
        }
    }
}

fn unit_interval(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}

/// Cut-offs used by the trend and volatility classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// `|trend|` above this is a strong trend.
    pub strong_trend: f64,
    /// `|trend|` above this (and up to `strong_trend`) is a slight trend.
    pub slight_trend: f64,
    /// Smoothed level above this is a positive mood state.
    pub positive_level: f64,
    /// Smoothed level below this is a negative mood state.
    pub negative_level: f64,
    /// Final one-step residual above this flags a sudden change.
    pub sudden_change: f64,
    /// Residual RMS above this flags a volatile history.
    pub volatility: f64,
    /// Scores above this count toward `percent_positive`.
    pub positive_score: f64,
    /// Scores below this count toward `percent_negative`.
    pub negative_score: f64,
}

impl ClassifierThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("strong_trend", self.strong_trend),
            ("slight_trend", self.slight_trend),
            ("positive_level", self.positive_level),
            ("negative_level", self.negative_level),
            ("sudden_change", self.sudden_change),
            ("volatility", self.volatility),
            ("positive_score", self.positive_score),
            ("negative_score", self.negative_score),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Parse(format!(
                    "thresholds.{} must be finite",
                    name
                )));
            }
        }
        if self.slight_trend < 0.0 || self.slight_trend > self.strong_trend {
            return Err(ConfigError::Parse(
                "thresholds.slight_trend must be in [0, strong_trend]".into(),
            ));
        }
        if self.negative_level > self.positive_level {
            return Err(ConfigError::Parse(
                "thresholds.negative_level must not exceed positive_level".into(),
            ));
        }
        if self.negative_score > self.positive_score {
            return Err(ConfigError::Parse(
                "thresholds.negative_score must not exceed positive_score".into(),
            ));
        }
        if self.sudden_change < 0.0 || self.volatility < 0.0 {
            return Err(ConfigError::Parse(
                "thresholds.sudden_change and thresholds.volatility must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            strong_trend: 0.2,
            slight_trend: 0.05,
            positive_level: 0.3,
            negative_level: -0.3,
            sudden_change: 0.6,
            volatility: 0.4,
            positive_score: 0.2,
            negative_score: -0.2,
        }
    }
}

/// Parameters of the window-average shift detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Trailing window, in days, the detector looks at.
    pub window_days: i64,
    /// Upper bound on the size of the current and previous averaging windows.
    pub max_window: usize,
    /// Minimum observations inside `window_days` before a shift is reported.
    pub min_observations: usize,
    /// Absolute change of window averages that counts as a shift.
    pub delta: f64,
}

impl ShiftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days <= 0 {
            return Err(ConfigError::Parse("shift.window_days must be positive".into()));
        }
        if self.max_window == 0 {
            return Err(ConfigError::Parse("shift.max_window must be non-zero".into()));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(ConfigError::Parse("shift.delta must be positive".into()));
        }
        Ok(())
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            max_window: 5,
            min_observations: 3,
            delta: 0.3,
        }
    }
}

/// Complete engine configuration.
///
/// # Examples
///
/// ```
/// use mood_core::EngineConfig;
///
/// let config = EngineConfig::load_from_file("config/mood_engine.toml")
///     .unwrap_or_else(|_| EngineConfig::default());
///
/// println!("alpha={} beta={}", config.smoothing.alpha, config.smoothing.beta);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct EngineConfig {
    pub smoothing: SmoothingConstants,
    pub thresholds: ClassifierThresholds,
    pub shift: ShiftConfig,
    pub weights: MoodWeightTable,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawEngineConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        let smoothing = SmoothingConstants::new(raw.smoothing.alpha, raw.smoothing.beta)?;

        let thresholds = ClassifierThresholds {
            strong_trend: raw.thresholds.strong_trend,
            slight_trend: raw.thresholds.slight_trend,
            positive_level: raw.thresholds.positive_level,
            negative_level: raw.thresholds.negative_level,
            sudden_change: raw.thresholds.sudden_change,
            volatility: raw.thresholds.volatility,
            positive_score: raw.thresholds.positive_score,
            negative_score: raw.thresholds.negative_score,
        };
        thresholds.validate()?;

        let shift = ShiftConfig {
            window_days: raw.shift.window_days,
            max_window: raw.shift.max_window,
            min_observations: raw.shift.min_observations,
            delta: raw.shift.delta,
        };
        shift.validate()?;

        let mut weights = if raw.weights.replace_defaults {
            MoodWeightTable::empty()
        } else {
            MoodWeightTable::default()
        };
        for (label, weight) in &raw.weights.labels {
            if !weight.is_finite() || !(-1.0..=1.0).contains(weight) {
                return Err(ConfigError::Parse(format!(
                    "weights.{} must be in [-1, 1]",
                    label
                )));
            }
            weights.set_weight(label, *weight);
        }

        Ok(Self {
            smoothing,
            thresholds,
            shift,
            weights,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawEngineConfig {
    #[serde(default)]
    smoothing: RawSmoothing,
    #[serde(default)]
    thresholds: RawThresholds,
    #[serde(default)]
    shift: RawShift,
    #[serde(default)]
    weights: RawWeights,
}

#[derive(Debug, Deserialize)]
struct RawSmoothing {
    #[serde(default = "default_alpha")]
    alpha: f64,
    #[serde(default = "default_beta")]
    beta: f64,
}

impl Default for RawSmoothing {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawThresholds {
    strong_trend: f64,
    slight_trend: f64,
    positive_level: f64,
    negative_level: f64,
    sudden_change: f64,
    volatility: f64,
    positive_score: f64,
    negative_score: f64,
}

impl Default for RawThresholds {
    fn default() -> Self {
        let defaults = ClassifierThresholds::default();
        Self {
            strong_trend: defaults.strong_trend,
            slight_trend: defaults.slight_trend,
            positive_level: defaults.positive_level,
            negative_level: defaults.negative_level,
            sudden_change: defaults.sudden_change,
            volatility: defaults.volatility,
            positive_score: defaults.positive_score,
            negative_score: defaults.negative_score,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawShift {
    window_days: i64,
    max_window: usize,
    min_observations: usize,
    delta: f64,
}

impl Default for RawShift {
    fn default() -> Self {
        let defaults = ShiftConfig::default();
        Self {
            window_days: defaults.window_days,
            max_window: defaults.max_window,
            min_observations: defaults.min_observations,
            delta: defaults.delta,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawWeights {
    #[serde(default)]
    replace_defaults: bool,
    #[serde(flatten)]
    labels: BTreeMap<String, f64>,
}

fn default_alpha() -> f64 {
    0.3
}

fn default_beta() -> f64 {
    0.1
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!((config.smoothing.alpha - 0.3).abs() < f64::EPSILON);
        assert!((config.smoothing.beta - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_custom_values() {
        let toml = "[smoothing]\nalpha = 0.5\n\n[thresholds]\nsudden_change = 0.8\n\n[shift]\nwindow_days = 14\n";
        let config = EngineConfig::from_str(toml).unwrap();
        assert!((config.smoothing.alpha - 0.5).abs() < f64::EPSILON);
        assert!((config.smoothing.beta - 0.1).abs() < f64::EPSILON);
        assert!((config.thresholds.sudden_change - 0.8).abs() < f64::EPSILON);
        assert!((config.thresholds.volatility - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.shift.window_days, 14);
        assert_eq!(config.shift.max_window, 5);
    }

    #[test]
    fn weights_section_extends_default_table() {
        let toml = "[weights]\nserene = 0.6\nhappy = 0.7\n";
        let config = EngineConfig::from_str(toml).unwrap();
        assert_eq!(config.weights.weight("serene"), 0.6);
        assert_eq!(config.weights.weight("happy"), 0.7);
        assert_eq!(config.weights.weight("joy"), 0.9);
    }

    #[test]
    fn weights_section_can_replace_defaults() {
        let toml = "[weights]\nreplace_defaults = true\nup = 0.5\ndown = -0.5\n";
        let config = EngineConfig::from_str(toml).unwrap();
        assert_eq!(config.weights.len(), 2);
        assert_eq!(config.weights.weight("joy"), 0.0);
        assert_eq!(config.weights.weight("down"), -0.5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            EngineConfig::from_str("[smoothing]\nalpha = 0.0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_str("[smoothing]\nbeta = 1.5\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_str("[thresholds]\nslight_trend = 0.5\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_str("[weights]\njoy = 2.0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_str("[shift]\nwindow_days = 0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_str("[smoothing\nalpha = 0.3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn smoothing_constants_constructor_validates() {
        assert!(SmoothingConstants::new(0.3, 0.1).is_ok());
        assert!(SmoothingConstants::new(f64::NAN, 0.1).is_err());
        assert!(SmoothingConstants::new(0.3, -0.1).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[smoothing]\nalpha = 0.4\nbeta = 0.2").unwrap();
        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert!((config.smoothing.alpha - 0.4).abs() < f64::EPSILON);
        assert!((config.smoothing.beta - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
