//! Mental health risk scoring
//!
//! Six independent threshold rules, each adding a fixed weight. All rules are
//! evaluated on every input; the sum is capped at 1.0. Weights are kept in
//! basis points so the sum is exact and independent of evaluation order.

use crate::models::PredictionInput;

/// Risk above this value produces the positive message (strict inequality)
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

pub const HIGH_RISK_MESSAGE: &str = "Potential mental health concerns detected";
pub const LOW_RISK_MESSAGE: &str = "No significant mental health concerns detected";

const BASIS_POINTS: u32 = 10_000;

/// A single threshold rule
#[derive(Debug, Clone, Copy)]
pub struct RiskFactor {
    pub name: &'static str,
    /// Weight in basis points (1/10000)
    pub weight_bp: u32,
    applies: fn(&PredictionInput) -> bool,
}

impl RiskFactor {
    pub fn weight(&self) -> f64 {
        self.weight_bp as f64 / BASIS_POINTS as f64
    }

    pub fn applies(&self, input: &PredictionInput) -> bool {
        (self.applies)(input)
    }
}

/// The rule table. Short and long sleep are separate rules, not branches.
pub const RISK_FACTORS: [RiskFactor; 6] = [
    RiskFactor {
        name: "short_sleep",
        weight_bp: 2_000,
        applies: |i| i.sleep_hours < 6.0,
    },
    RiskFactor {
        name: "long_sleep",
        weight_bp: 1_000,
        applies: |i| i.sleep_hours > 9.0,
    },
    RiskFactor {
        name: "long_work_week",
        weight_bp: 1_500,
        applies: |i| i.work_hours_per_week > 50.0,
    },
    RiskFactor {
        name: "high_screen_time",
        weight_bp: 1_500,
        applies: |i| i.screen_time_per_day > 8.0,
    },
    RiskFactor {
        name: "low_social_interaction",
        weight_bp: 2_000,
        applies: |i| i.social_interaction_score < 5.0,
    },
    RiskFactor {
        name: "low_happiness",
        weight_bp: 3_000,
        applies: |i| i.happiness_score < 5.0,
    },
];

/// Score plus the names of the rules that fired
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub score: f64,
    pub factors: Vec<&'static str>,
}

impl RiskAssessment {
    pub fn is_high_risk(&self) -> bool {
        self.score > HIGH_RISK_THRESHOLD
    }

    pub fn message(&self) -> &'static str {
        message_for(self.score)
    }
}

pub fn assess(input: &PredictionInput) -> RiskAssessment {
    let fired: Vec<&RiskFactor> = RISK_FACTORS.iter().filter(|f| f.applies(input)).collect();
    let total_bp: u32 = fired.iter().map(|f| f.weight_bp).sum();

    RiskAssessment {
        score: total_bp.min(BASIS_POINTS) as f64 / BASIS_POINTS as f64,
        factors: fired.iter().map(|f| f.name).collect(),
    }
}

/// Bounded risk in [0, 1]
pub fn score(input: &PredictionInput) -> f64 {
    assess(input).score
}

pub fn message_for(risk: f64) -> &'static str {
    if risk > HIGH_RISK_THRESHOLD {
        HIGH_RISK_MESSAGE
    } else {
        LOW_RISK_MESSAGE
    }
}
