use chrono::Utc;
use tracing_subscriber::EnvFilter;

use mood_core::config::ConfigError;
use mood_core::logging;
use mood_core::{observations_from_records, EngineConfig, MoodLogRecord, MoodTrendEngine, Period};

const SAMPLE_LOG: &str = r#"[
    {"date": "2024-05-01", "mood": "sad", "intensity": 7},
    {"date": "2024-05-02", "mood": "anxious", "intensity": 6},
    {"date": "2024-05-03", "mood": "neutral", "intensity": 5},
    {"date": "2024-05-04", "mood": "calm", "intensity": 6},
    {"date": "2024-05-05", "mood": "calm", "intensity": 8},
    {"date": "2024-05-06", "mood": "happy", "intensity": 6},
    {"date": "2024-05-07", "mood": "happy", "intensity": 8}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    println!(
        "Loaded config: alpha={} beta={} labels={}",
        config.smoothing.alpha,
        config.smoothing.beta,
        config.weights.len()
    );

    let records: Vec<MoodLogRecord> = serde_json::from_str(SAMPLE_LOG)?;
    let observations = observations_from_records(&records);
    let now = Utc::now();
    let engine = MoodTrendEngine::new(config);
    let result = engine.analyze_at(&observations, Period::All, now);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(summary) = engine.summarize(&observations, Period::All, now) {
        println!(
            "Summary: {} days, average {:.3}, {:?}",
            summary.days, summary.average, summary.stability
        );
    }

    logging::log_analysis(&result)?;

    match result.analysis() {
        Some(analysis) => println!(
            "Demo complete. {} and {}, forecast {:.3}",
            analysis.mood_state, analysis.trend_strength, analysis.forecasted_mood
        ),
        None => println!("Demo complete. {}", result.recommendation()),
    }
    Ok(())
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    EngineConfig::load_from_file("config/mood_engine.toml").or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        Ok(EngineConfig::default())
    })
}
