//! Core data models for the wellness service
//!
//! Wire types keep the dashboard's literal field names (spaces included);
//! internal types use normalized identifiers.

use crate::categories::{Category, CategoryPolicy, DietType, ExerciseLevel, Gender, StressLevel};
use crate::error::InputError;
use serde::{Deserialize, Deserializer, Serialize};

/// Questionnaire as submitted by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Sleep Hours")]
    pub sleep_hours: f64,
    #[serde(rename = "Work Hours per Week")]
    pub work_hours_per_week: f64,
    #[serde(rename = "Screen Time per Day (Hours)")]
    pub screen_time_per_day: f64,
    #[serde(rename = "Social Interaction Score")]
    pub social_interaction_score: f64,
    #[serde(rename = "Happiness Score")]
    pub happiness_score: f64,
    #[serde(rename = "Gender", default, deserialize_with = "scalar_label")]
    pub gender: String,
    #[serde(rename = "Exercise Level", default, deserialize_with = "scalar_label")]
    pub exercise_level: String,
    #[serde(rename = "Diet Type", default, deserialize_with = "scalar_label")]
    pub diet_type: String,
    #[serde(rename = "Stress Level", default, deserialize_with = "scalar_label")]
    pub stress_level: String,
}

/// `null` reads as an empty label and other scalars as their JSON text
fn scalar_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(label) => Ok(label),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(D::Error::custom(
            "expected a categorical label, found a structured value",
        )),
    }
}

/// A categorical value that did not match any bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedCategory {
    pub field: &'static str,
    pub value: String,
}

impl PredictionRequest {
    /// Parse a JSON request body
    pub fn from_json(body: &[u8]) -> Result<Self, InputError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Categorical fields whose values will fall back to a default bucket
    pub fn unrecognized_fields(&self) -> Vec<UnrecognizedCategory> {
        fn check<C: Category>(raw: &str, out: &mut Vec<UnrecognizedCategory>) {
            if C::from_label(raw).is_none() {
                out.push(UnrecognizedCategory {
                    field: C::FIELD,
                    value: raw.to_string(),
                });
            }
        }

        let mut out = Vec::new();
        check::<Gender>(&self.gender, &mut out);
        check::<ExerciseLevel>(&self.exercise_level, &mut out);
        check::<DietType>(&self.diet_type, &mut out);
        check::<StressLevel>(&self.stress_level, &mut out);
        out
    }

    /// Convert into a scoring input, resolving labels under `policy`
    pub fn to_input(&self, policy: CategoryPolicy) -> Result<PredictionInput, InputError> {
        fn field<C: Category>(raw: &str, policy: CategoryPolicy) -> Result<C, InputError> {
            C::resolve_with(raw, policy).ok_or_else(|| InputError::UnrecognizedCategory {
                field: C::FIELD,
                value: raw.to_string(),
            })
        }

        Ok(PredictionInput {
            age: self.age,
            sleep_hours: self.sleep_hours,
            work_hours_per_week: self.work_hours_per_week,
            screen_time_per_day: self.screen_time_per_day,
            social_interaction_score: self.social_interaction_score,
            happiness_score: self.happiness_score,
            gender: field(&self.gender, policy)?,
            exercise_level: field(&self.exercise_level, policy)?,
            diet_type: field(&self.diet_type, policy)?,
            stress_level: field(&self.stress_level, policy)?,
        })
    }
}

impl From<&PredictionInput> for PredictionRequest {
    fn from(input: &PredictionInput) -> Self {
        Self {
            age: input.age,
            sleep_hours: input.sleep_hours,
            work_hours_per_week: input.work_hours_per_week,
            screen_time_per_day: input.screen_time_per_day,
            social_interaction_score: input.social_interaction_score,
            happiness_score: input.happiness_score,
            gender: input.gender.label().to_string(),
            exercise_level: input.exercise_level.label().to_string(),
            diet_type: input.diet_type.label().to_string(),
            stress_level: input.stress_level.label().to_string(),
        }
    }
}

/// Typed questionnaire used by the scorer
///
/// Numeric fields are trusted as-is; no range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionInput {
    pub age: f64,
    pub sleep_hours: f64,
    pub work_hours_per_week: f64,
    pub screen_time_per_day: f64,
    /// Nominally 1-10
    pub social_interaction_score: f64,
    /// Nominally 1-10
    pub happiness_score: f64,
    pub gender: Gender,
    pub exercise_level: ExerciseLevel,
    pub diet_type: DietType,
    pub stress_level: StressLevel,
}

impl Default for PredictionInput {
    /// Matches the initial state of the dashboard assessment form
    fn default() -> Self {
        Self {
            age: 25.0,
            sleep_hours: 7.0,
            work_hours_per_week: 40.0,
            screen_time_per_day: 6.0,
            social_interaction_score: 7.0,
            happiness_score: 8.0,
            gender: Gender::Male,
            exercise_level: ExerciseLevel::Moderate,
            diet_type: DietType::Balanced,
            stress_level: StressLevel::Low,
        }
    }
}

/// Full response of the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub mental_health: MentalHealthAssessment,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalHealthAssessment {
    /// Additive heuristic in [0, 1], not a calibrated probability
    pub risk: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub exercises: Vec<String>,
    pub equipment: Vec<String>,
    pub diet: DietPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub meals: Vec<String>,
    pub supplements: Vec<String>,
    pub hydration: String,
}

/// Body of the BMI endpoint, in the units stored on a dashboard profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiRequest {
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    #[serde(rename = "height")]
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Rounded to one decimal
    pub bmi: f64,
    pub category: crate::bmi::BmiCategory,
}
