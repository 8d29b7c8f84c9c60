//! Trend analysis pipeline: windowing, smoothing, evaluation, classification,
//! forecasting and guidance, plus the shift detector and summary statistics
//! built on the same scored history.

pub mod classify;
pub mod evaluate;
pub mod forecast;
pub mod period;
pub mod recommend;
pub mod shift;
pub mod smoothing;
pub mod summary;

pub use classify::{classify, is_sudden_change, is_volatile, Classification, MoodState, TrendStrength};
pub use evaluate::{evaluate_models, residuals, ModelEvaluation};
pub use forecast::{project, Forecast, MoodDirection, FORECAST_HORIZON};
pub use period::{filter_period, Period};
pub use recommend::{recommend, select_guidance, Guidance, GuidanceSignals, Recommendation};
pub use shift::{detect_window_shift, NoticeKind, Severity, ShiftKind, ShiftNotice, WindowShift};
pub use smoothing::{holt_linear, simple_exponential, SmoothingStep};
pub use summary::{summarize, CategoryDistribution, HalfTrend, MoodSummary, Stability};
