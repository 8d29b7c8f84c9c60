use chrono::{DateTime, Duration, TimeZone, Utc};
use mood_core::{
    holt_linear, AnalysisResult, EngineConfig, MoodDirection, MoodLogRecord, MoodObservation,
    MoodState, MoodTrendEngine, MoodWeightTable, Period, SmoothingConstants, TrendStrength,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 20, 21, 0, 0).unwrap()
}

/// One observation per day, the last one yesterday.
fn daily(entries: &[(&str, u8)]) -> Vec<MoodObservation> {
    let len = entries.len() as i64;
    entries
        .iter()
        .enumerate()
        .map(|(i, (label, intensity))| {
            MoodObservation::new(now() - Duration::days(len - i as i64), *label, *intensity)
        })
        .collect()
}

fn analyze(observations: &[MoodObservation], period: Period) -> AnalysisResult {
    MoodTrendEngine::default().analyze_at(observations, period, now())
}

#[test]
fn fewer_than_three_observations_are_insufficient() {
    for count in 0..3 {
        let observations = daily(&vec![("happy", 7); count]);
        let result = analyze(&observations, Period::All);
        assert_eq!(result.status(), "insufficient_data");
        assert!(result.analysis().is_none());

        let json = serde_json::to_value(&result).unwrap();
        for field in ["trendStrength", "futureForecast", "forecastedMood", "moodState"] {
            assert!(json.get(field).is_none(), "{} populated for n={}", field, count);
        }
    }
    assert!(analyze(&daily(&[("happy", 7); 3]), Period::All).is_analyzed());
}

#[test]
fn identical_inputs_give_identical_output() {
    let observations = daily(&[
        ("joy", 4),
        ("sadness", 6),
        ("calm", 7),
        ("anxious", 3),
        ("happy", 9),
        ("neutral", 5),
    ]);
    let first = serde_json::to_string(&analyze(&observations, Period::Month)).unwrap();
    let second = serde_json::to_string(&analyze(&observations, Period::Month)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn holt_initial_trend_is_first_difference() {
    let constants = SmoothingConstants::default();
    let steps = holt_linear(&[0.1, 0.45, 0.3, 0.2], &constants);
    assert!((steps[0].trend - 0.35).abs() < 1e-12);
    assert_eq!(holt_linear(&[0.7], &constants)[0].trend, 0.0);
}

#[test]
fn forecast_extrapolates_final_level_and_trend() {
    let observations = daily(&[("sad", 7), ("neutral", 5), ("calm", 6), ("joy", 4), ("love", 8)]);
    let result = analyze(&observations, Period::All);
    let analysis = result.analysis().unwrap();
    let level = analysis.current_mood_score;
    let trend = analysis.trend_direction;
    for (i, value) in analysis.future_forecast.iter().enumerate() {
        assert!((value - (level + (i + 1) as f64 * trend)).abs() < 1e-9);
    }
    assert!((analysis.future_forecast[2] - (level + 3.0 * trend)).abs() < 1e-9);
    assert_eq!(analysis.forecasted_mood, analysis.future_forecast[2]);
}

#[test]
fn scenario_rising_happiness_is_positive_and_improving() {
    let observations = daily(&[("happy", 5), ("happy", 6), ("happy", 7), ("happy", 8), ("happy", 9)]);
    let result = analyze(&observations, Period::All);
    assert_eq!(result.status(), "analyzed");

    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.mood_state, MoodState::Positive);
    assert!(analysis.trend_strength.is_improving());
    assert_eq!(analysis.trend_strength, TrendStrength::SlightlyImproving);
    assert_eq!(analysis.expected_mood_direction, MoodDirection::Improving);
    assert!((analysis.current_mood_score - 0.81).abs() < 1e-9);
    assert!((analysis.trend_direction - 0.09).abs() < 1e-9);
    assert!(!analysis.sudden_change);
    assert!(!analysis.is_volatile);
    assert!((analysis.percent_positive - 100.0).abs() < 1e-12);
}

#[test]
fn scenario_constant_low_sadness_is_stable_and_neutral() {
    let observations = daily(&[("sad", 3), ("sad", 3), ("sad", 3)]);
    let result = analyze(&observations, Period::All);
    let analysis = result.analysis().unwrap();

    assert_eq!(analysis.trend_strength, TrendStrength::Stable);
    assert!(!analysis.is_volatile);
    // -0.8 * 0.3 = -0.24 sits inside the neutral band (-0.3, 0.3].
    assert!((analysis.current_mood_score + 0.24).abs() < 1e-9);
    assert_eq!(analysis.mood_state, MoodState::Neutral);
    assert!(analysis.trend_direction.abs() < 1e-12);
    assert!((analysis.percent_negative - 100.0).abs() < 1e-12);
}

#[test]
fn scenario_sharp_drop_flags_sudden_change() {
    let observations = daily(&[
        ("happy", 9),
        ("happy", 9),
        ("happy", 9),
        ("happy", 9),
        ("happy", 9),
        ("angry", 10),
    ]);
    let result = analyze(&observations, Period::All);
    let analysis = result.analysis().unwrap();
    assert!(analysis.sudden_change);
    assert!(analysis.trend_direction < 0.0);
}

#[test]
fn unknown_labels_default_to_neutral_weight() {
    let observations = daily(&[("ecstatic", 10), ("devastated", 10), ("meh", 10)]);
    let result = analyze(&observations, Period::All);
    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.current_mood_score, 0.0);
    assert_eq!(analysis.trend_direction, 0.0);
    assert_eq!(analysis.mood_state, MoodState::Neutral);
    assert_eq!(analysis.percent_positive, 0.0);
    assert_eq!(analysis.percent_negative, 0.0);
}

#[test]
fn synthetic_weight_table_replaces_vocabulary() {
    let config = EngineConfig {
        weights: MoodWeightTable::empty()
            .with_weight("low", -0.9)
            .with_weight("high", 0.9),
        ..EngineConfig::default()
    };
    let engine = MoodTrendEngine::new(config);
    let observations = daily(&[("low", 10), ("low", 10), ("low", 10), ("low", 10)]);
    let result = engine.analyze_at(&observations, Period::All, now());
    assert_eq!(result.analysis().unwrap().mood_state, MoodState::Negative);
}

#[test]
fn period_filter_limits_history() {
    let mut observations = daily(&[("sad", 8); 10]);
    observations.extend(daily(&[("happy", 8); 3]).into_iter().map(|mut o| {
        o.timestamp = now() - Duration::hours(3);
        o
    }));
    for item in observations.iter_mut().take(10) {
        item.timestamp = item.timestamp - Duration::days(60);
    }

    let week = analyze(&observations, Period::Week);
    assert_eq!(week.observation_count(), 3);
    assert_eq!(week.analysis().unwrap().mood_state, MoodState::Positive);

    let all = analyze(&observations, Period::All);
    assert_eq!(all.observation_count(), 13);
}

#[test]
fn log_store_records_are_analyzed() {
    let payload = r#"[
        {"date": "2024-11-17", "mood": "sad", "intensity": 6},
        {"date": "2024-11-18T08:30:00Z", "mood": "neutral", "intensity": 5},
        {"date": "2024-11-19", "mood": "calm", "intensity": 7},
        {"date": "garbage", "mood": "happy", "intensity": 9},
        {"date": "2024-11-20", "mood": "happy", "intensity": 8}
    ]"#;
    let records: Vec<MoodLogRecord> = serde_json::from_str(payload).unwrap();
    let result = MoodTrendEngine::default().analyze_records(&records, Period::Week, now());
    assert_eq!(result.observation_count(), 4);
    assert!(result.analysis().unwrap().trend_strength.is_improving());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = MoodTrendEngine::default();
    let observations = daily(&[("joy", 3), ("calm", 5), ("happy", 8), ("proud", 6)]);
    let expected = engine.analyze_at(&observations, Period::All, now());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.analyze_at(&observations, Period::All, now())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
