use super::recommendations::{diet_for, equipment_for, exercises_for};
use super::risk::assess;
use super::{Prediction, Predictor};
use crate::models::{MentalHealthAssessment, PredictionInput, PredictionResult, Recommendations};

pub const RULE_SET_VERSION: &str = "rules-v1";

/// Stateless predictor backed by the fixed rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthPredictor;

impl HealthPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl Predictor for HealthPredictor {
    fn predict(&self, input: &PredictionInput) -> Prediction {
        // Scoring and selection are independent of each other
        let assessment = assess(input);
        let recommendations = Recommendations {
            exercises: exercises_for(input.exercise_level),
            equipment: equipment_for(input.exercise_level),
            diet: diet_for(input.diet_type),
        };

        Prediction {
            result: PredictionResult {
                mental_health: MentalHealthAssessment {
                    risk: assessment.score,
                    message: assessment.message().to_string(),
                },
                recommendations,
            },
            risk_factors: assessment.factors,
        }
    }

    fn rule_set(&self) -> &str {
        RULE_SET_VERSION
    }
}
