//! Decision table from classifier signals to human-readable guidance.
//!
//! Selection is an exhaustive match with a fixed priority: volatility first,
//! then a sudden change in a positive or negative state, then the
//! steady-state rules for the current mood state. A sudden change while the
//! state is neutral falls through to the neutral rules.

use serde::Serialize;

use super::classify::{MoodState, TrendStrength};
use super::forecast::MoodDirection;

/// Classifier outputs the decision table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuidanceSignals {
    pub is_volatile: bool,
    pub sudden_change: bool,
    pub mood_state: MoodState,
    pub trend_strength: TrendStrength,
    pub expected_direction: MoodDirection,
}

/// Rule selected by the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guidance {
    Volatile,
    SuddenLift,
    SuddenDrop,
    PositiveMomentum,
    PositiveAtRisk,
    PositiveSteady,
    NegativeRecovering,
    NegativeWorsening,
    NegativePersistent,
    NeutralRising,
    NeutralFalling,
    NeutralSteady,
}

/// Static guidance content attached to an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub insight: String,
    pub recommendation: String,
    pub activities: Vec<String>,
}

pub fn select_guidance(signals: &GuidanceSignals) -> Guidance {
    use MoodState::{Negative, Neutral, Positive};

    let trend = signals.trend_strength.direction();
    let expected = signals.expected_direction;

    match (signals.is_volatile, signals.sudden_change, signals.mood_state) {
        (true, _, _) => Guidance::Volatile,
        (false, true, Positive) => Guidance::SuddenLift,
        (false, true, Negative) => Guidance::SuddenDrop,
        (false, false, Positive) => positive_rule(trend, expected),
        (false, false, Negative) => negative_rule(trend, expected),
        (false, _, Neutral) => neutral_rule(expected),
    }
}

fn positive_rule(trend: MoodDirection, expected: MoodDirection) -> Guidance {
    use MoodDirection::{Declining, Improving, Stable};

    match (trend, expected) {
        (Improving, Improving) => Guidance::PositiveMomentum,
        (Improving | Stable | Declining, Declining) => Guidance::PositiveAtRisk,
        (Stable | Declining, Improving) | (Improving | Stable | Declining, Stable) => {
            Guidance::PositiveSteady
        }
    }
}

fn negative_rule(trend: MoodDirection, expected: MoodDirection) -> Guidance {
    use MoodDirection::{Declining, Improving, Stable};

    match (trend, expected) {
        (Improving, Improving) => Guidance::NegativeRecovering,
        (Declining, Improving | Stable | Declining) | (Improving | Stable, Declining) => {
            Guidance::NegativeWorsening
        }
        (Improving, Stable) | (Stable, Improving | Stable) => Guidance::NegativePersistent,
    }
}

fn neutral_rule(expected: MoodDirection) -> Guidance {
    match expected {
        MoodDirection::Improving => Guidance::NeutralRising,
        MoodDirection::Declining => Guidance::NeutralFalling,
        MoodDirection::Stable => Guidance::NeutralSteady,
    }
}

impl Guidance {
    pub const ALL: [Guidance; 12] = [
        Guidance::Volatile,
        Guidance::SuddenLift,
        Guidance::SuddenDrop,
        Guidance::PositiveMomentum,
        Guidance::PositiveAtRisk,
        Guidance::PositiveSteady,
        Guidance::NegativeRecovering,
        Guidance::NegativeWorsening,
        Guidance::NegativePersistent,
        Guidance::NeutralRising,
        Guidance::NeutralFalling,
        Guidance::NeutralSteady,
    ];

    pub fn insight(&self) -> &'static str {
        match self {
            Guidance::Volatile => "Your emotions have been quite variable recently.",
            Guidance::SuddenLift => "I notice a significant positive shift in your mood!",
            Guidance::SuddenDrop => "I notice a significant drop in your mood recently.",
            Guidance::PositiveMomentum => {
                "Your emotions have been increasingly positive and may continue improving."
            }
            Guidance::PositiveAtRisk => {
                "Your mood has been positive, but our analysis suggests it may decrease slightly in the coming days."
            }
            Guidance::PositiveSteady => "Your emotions have been consistently positive lately.",
            Guidance::NegativeRecovering => {
                "Although you've experienced difficult emotions, they're improving and likely to continue getting better."
            }
            Guidance::NegativeWorsening => {
                "I notice your emotions have been challenging and this pattern may continue in the near future."
            }
            Guidance::NegativePersistent => {
                "You've been experiencing challenging emotions for a while."
            }
            Guidance::NeutralRising => {
                "Your emotional state has been balanced and our analysis suggests it may improve soon."
            }
            Guidance::NeutralFalling => {
                "Your mood has been balanced but may face some challenges in the coming days."
            }
            Guidance::NeutralSteady => {
                "Your emotional state has been relatively stable lately and is likely to remain so."
            }
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Guidance::Volatile => {
                "Emotional variability can be challenging. Establishing routines and practicing mindfulness may help stabilize your mood."
            }
            Guidance::SuddenLift => {
                "Take a moment to reflect on what contributed to this positive change. Understanding what helps your mood can be valuable for your future well-being."
            }
            Guidance::SuddenDrop => {
                "Sudden emotional changes can be challenging. Consider some immediate self-care strategies to help process these feelings."
            }
            Guidance::PositiveMomentum => {
                "You're in a great emotional place with positive momentum. This is an ideal time to build resilience and set new goals."
            }
            Guidance::PositiveAtRisk => {
                "Being proactive about self-care can help maintain your emotional well-being through potential challenges ahead."
            }
            Guidance::PositiveSteady => {
                "You're doing well! This is a great time to understand what's working and build healthy habits."
            }
            Guidance::NegativeRecovering => {
                "You're on a positive trajectory. Continue with the changes that seem to be helping."
            }
            Guidance::NegativeWorsening => {
                "When experiencing persistent difficult feelings, additional support can be very helpful."
            }
            Guidance::NegativePersistent => {
                "Persistent feelings of sadness, anger, or fear may benefit from additional support strategies."
            }
            Guidance::NeutralRising => {
                "You're on a promising path. Consider activities that will continue this positive momentum."
            }
            Guidance::NeutralFalling => {
                "Taking proactive steps now may help prevent difficult emotions from developing."
            }
            Guidance::NeutralSteady => {
                "This is a good time to build emotional resilience for the future."
            }
        }
    }

    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            Guidance::Volatile => &[
                "Establish consistent sleep and meal schedules",
                "Practice daily mindfulness meditation (even just 5 minutes)",
                "Create a mood journal to identify triggers for mood changes",
                "Focus on activities that bring a sense of calm and stability",
                "Consider talking with a professional about emotional regulation strategies",
            ],
            Guidance::SuddenLift => &[
                "Journal about what triggered this positive emotional shift",
                "Share your joy or excitement with someone you trust",
                "Practice gratitude by listing 3 things you're thankful for",
            ],
            Guidance::SuddenDrop => &[
                "Try a 5-minute mindfulness or deep breathing exercise",
                "Get some fresh air with a short walk outside",
                "Connect with a supportive friend or family member",
                "Engage in a simple, enjoyable activity that might provide relief",
            ],
            Guidance::PositiveMomentum => &[
                "Reflect on what's contributing to your joy, love, or optimism",
                "Challenge yourself with a new goal or learning opportunity",
                "Express gratitude to someone who has positively impacted you",
                "Create a list of activities that boost your mood for future reference",
            ],
            Guidance::PositiveAtRisk => &[
                "Schedule an activity that reliably brings you joy or excitement",
                "Check in on your basic needs - sleep, hydration, nutrition",
                "Take some time for a hobby or activity you truly enjoy",
                "Practice a brief gratitude exercise to reinforce positive emotions",
            ],
            Guidance::PositiveSteady => &[
                "Maintain your current self-care routines",
                "Consider journaling about what's contributing to your positive emotions",
                "Share your positive energy through connection with others",
                "Try something new that brings you joy or excitement",
            ],
            Guidance::NegativeRecovering => &[
                "Acknowledge and celebrate small improvements in how you feel",
                "Continue with activities that seem to be helping reduce difficult emotions",
                "Get some physical movement - even a short walk can help lift your mood",
                "Practice self-compassion by speaking kindly to yourself",
            ],
            Guidance::NegativeWorsening => &[
                "Reach out to a trusted friend, family member, or professional",
                "Focus on basic self-care like adequate sleep and nutrition",
                "Try a 10-minute mindfulness exercise to help process emotions",
                "Limit exposure to negative media or stressful situations",
                "Remember that seeking professional support is a sign of strength",
            ],
            Guidance::NegativePersistent => &[
                "Consider speaking with a mental health professional",
                "Try to establish a routine with regular sleep and meal times",
                "Incorporate some daily physical activity to help process emotions",
                "Practice small acts of self-care throughout your day",
                "Connect with supportive people in your life",
            ],
            Guidance::NeutralRising => &[
                "Engage in activities that have recently brought you positive feelings",
                "Practice mindfulness to better understand your emotional patterns",
                "Connect with friends or family who uplift you",
                "Try something new that interests or excites you",
            ],
            Guidance::NeutralFalling => &[
                "Check in with yourself about potential upcoming stressors",
                "Prioritize rest and relaxation activities",
                "Consider a digital detox if media consumption is affecting your emotions",
                "Spend time in nature if possible",
            ],
            Guidance::NeutralSteady => &[
                "Experiment with new self-care activities to see what works for you",
                "Practice mindfulness or meditation to build emotional awareness",
                "Focus on strengthening your social connections",
                "Consider learning a new coping skill or stress management technique",
            ],
        }
    }

    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            insight: self.insight().to_string(),
            recommendation: self.recommendation().to_string(),
            activities: self.activities().iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Select the rule for `signals` and materialize its content.
pub fn recommend(signals: &GuidanceSignals) -> Recommendation {
    select_guidance(signals).to_recommendation()
}
