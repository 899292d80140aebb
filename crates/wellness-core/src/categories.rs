//! Categorical questionnaire fields
//!
//! Every categorical field is a closed enum with a named default variant.
//! Labels that match no variant resolve to that default instead of failing,
//! unless the caller opts into [`CategoryPolicy::Strict`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of labels with a fallback bucket
pub trait Category: Copy + Default + PartialEq + 'static {
    /// Wire name of the request field carrying this category
    const FIELD: &'static str;

    /// All variants, in display order
    const ALL: &'static [Self];

    /// Canonical label as sent by the dashboard form
    fn label(&self) -> &'static str;

    /// Strict lookup. Ignores surrounding whitespace and ASCII case.
    fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.label().eq_ignore_ascii_case(raw))
    }

    /// Permissive lookup: unknown labels land in the default bucket
    fn resolve(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or_default()
    }

    /// Resolve according to `policy`
    fn resolve_with(raw: &str, policy: CategoryPolicy) -> Option<Self> {
        match policy {
            CategoryPolicy::Permissive => Some(Self::resolve(raw)),
            CategoryPolicy::Strict => Self::from_label(raw),
        }
    }
}

/// How unrecognized categorical labels are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPolicy {
    /// Fall back to the default bucket
    #[default]
    Permissive,
    /// Reject the request
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Category for Gender {
    const FIELD: &'static str = "Gender";
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Self-reported exercise intensity. Anything unknown is treated as `Strong`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseLevel {
    Low,
    Moderate,
    #[default]
    Strong,
}

impl Category for ExerciseLevel {
    const FIELD: &'static str = "Exercise Level";
    const ALL: &'static [Self] = &[
        ExerciseLevel::Low,
        ExerciseLevel::Moderate,
        ExerciseLevel::Strong,
    ];

    fn label(&self) -> &'static str {
        match self {
            ExerciseLevel::Low => "Low",
            ExerciseLevel::Moderate => "Moderate",
            ExerciseLevel::Strong => "Strong",
        }
    }
}

/// Diet style. Anything unknown is treated as `Balanced`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    Balanced,
    Vegetarian,
    Vegan,
    Keto,
}

impl Category for DietType {
    const FIELD: &'static str = "Diet Type";
    const ALL: &'static [Self] = &[
        DietType::Balanced,
        DietType::Vegetarian,
        DietType::Vegan,
        DietType::Keto,
    ];

    fn label(&self) -> &'static str {
        match self {
            DietType::Balanced => "Balanced",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Keto => "Keto",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl Category for StressLevel {
    const FIELD: &'static str = "Stress Level";
    const ALL: &'static [Self] = &[StressLevel::Low, StressLevel::Medium, StressLevel::High];

    fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })+
    };
}

display_via_label!(Gender, ExerciseLevel, DietType, StressLevel);
