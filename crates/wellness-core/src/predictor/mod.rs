//! Rule-based health prediction engine

mod engine;
pub mod recommendations;
pub mod risk;

pub use engine::{HealthPredictor, RULE_SET_VERSION};
pub use recommendations::{diet_for, equipment_for, exercises_for};
pub use risk::{assess, message_for, RiskAssessment, RiskFactor, RISK_FACTORS};

use crate::models::{PredictionInput, PredictionResult};

/// Outcome of one prediction, with the rules that contributed to it
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub result: PredictionResult,
    pub risk_factors: Vec<&'static str>,
}

/// Trait for prediction implementations
pub trait Predictor: Send + Sync {
    /// Score the questionnaire and select recommendations
    fn predict(&self, input: &PredictionInput) -> Prediction;

    /// Identifier of the rule table in use
    fn rule_set(&self) -> &str;
}
