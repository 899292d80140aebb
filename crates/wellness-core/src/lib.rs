//! Wellness prediction core
//!
//! This crate provides the core functionality for:
//! - Questionnaire data model and wire format
//! - Rule-based mental health risk scoring
//! - Exercise, equipment and diet recommendations
//! - BMI calculation
//! - Health checks and observability

pub mod bmi;
pub mod categories;
pub mod error;
pub mod health;
pub mod models;
pub mod observability;
pub mod predictor;

pub use bmi::{calculate_bmi, BmiCategory};
pub use categories::{Category, CategoryPolicy, DietType, ExerciseLevel, Gender, StressLevel};
pub use error::{BmiError, InputError};
pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{ServiceMetrics, StructuredLogger};
pub use predictor::{HealthPredictor, Prediction, Predictor};
