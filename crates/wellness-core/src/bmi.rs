//! Body-mass index calculation for dashboard profiles

use crate::error::BmiError;
use crate::models::{BmiRequest, BmiResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an already rounded BMI value
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Healthy
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, BmiError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BmiError::InvalidMeasurement { field, value })
    }
}

/// Round to one decimal from the exact binary value, ties upward.
/// 24.9499.. must stay 24.9 even though `value * 10.0` lands on 249.5.
fn round_to_tenth(value: f64) -> f64 {
    if (value * 4.0).fract() == 0.0 {
        // x.25 and x.75 are the only exact ties
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Compute BMI from weight in kilograms and height in centimetres
///
/// The value is rounded to one decimal before classification, so the
/// category always agrees with the number shown to the user.
pub fn calculate_bmi(request: &BmiRequest) -> Result<BmiResult, BmiError> {
    let weight = ensure_positive("weight", request.weight_kg)?;
    let height_m = ensure_positive("height", request.height_cm)? / 100.0;

    let raw = weight / (height_m * height_m);
    let bmi = round_to_tenth(raw);

    Ok(BmiResult {
        bmi,
        category: BmiCategory::classify(bmi),
    })
}
