//! Canned recommendation buckets keyed by categorical answers

use crate::categories::{DietType, ExerciseLevel};
use crate::models::DietPlan;

/// Always the first equipment item, whatever the exercise level
pub const BASE_EQUIPMENT: &str = "Comfortable athletic shoes";

pub const HYDRATION_ADVICE: &str = "Drink 8-10 glasses of water daily";

const LOW_EXERCISES: [&str; 4] = [
    "Walking for 30 minutes daily",
    "Basic stretching exercises",
    "Light yoga poses",
    "Gentle swimming",
];

const MODERATE_EXERCISES: [&str; 4] = [
    "30-minute jogging sessions",
    "Bodyweight exercises",
    "Intermediate yoga",
    "Cycling",
];

const STRONG_EXERCISES: [&str; 4] = [
    "High-intensity interval training",
    "Advanced strength training",
    "Long-distance running",
    "CrossFit-style workouts",
];

const LOW_EQUIPMENT: &[&str] = &[
    "Yoga mat",
    "Light resistance bands",
    "Small hand weights (2-5 lbs)",
];

const MODERATE_EQUIPMENT: &[&str] = &[
    "Adjustable dumbbells",
    "Resistance bands set",
    "Foam roller",
    "Jump rope",
];

const STRONG_EQUIPMENT: &[&str] = &[
    "Olympic barbell set",
    "Power rack",
    "Kettlebells",
    "Medicine balls",
];

struct DietBucket {
    meals: [&'static str; 4],
    supplements: &'static [&'static str],
}

const BALANCED_DIET: DietBucket = DietBucket {
    meals: [
        "Oatmeal with fruits and nuts",
        "Grilled chicken salad",
        "Fish with quinoa and vegetables",
        "Greek yogurt with berries",
    ],
    supplements: &["Multivitamin", "Omega-3"],
};

const VEGETARIAN_DIET: DietBucket = DietBucket {
    meals: [
        "Quinoa bowl with roasted vegetables",
        "Greek yogurt with fruits and nuts",
        "Lentil curry with brown rice",
        "Vegetable stir-fry with tofu",
    ],
    supplements: &["Vitamin B12", "Iron", "Vitamin D"],
};

const VEGAN_DIET: DietBucket = DietBucket {
    meals: [
        "Overnight oats with plant-based milk",
        "Buddha bowl with chickpeas",
        "Black bean and sweet potato tacos",
        "Mushroom and pea protein pasta",
    ],
    supplements: &["Vitamin B12", "Vitamin D", "Iron", "Omega-3"],
};

const KETO_DIET: DietBucket = DietBucket {
    meals: [
        "Eggs and avocado breakfast",
        "Grilled chicken with cauliflower rice",
        "Salmon with asparagus",
        "Nuts and cheese snacks",
    ],
    supplements: &["Magnesium", "Omega-3", "Potassium"],
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn exercises_for(level: ExerciseLevel) -> Vec<String> {
    let bucket = match level {
        ExerciseLevel::Low => &LOW_EXERCISES,
        ExerciseLevel::Moderate => &MODERATE_EXERCISES,
        ExerciseLevel::Strong => &STRONG_EXERCISES,
    };
    owned(bucket)
}

pub fn equipment_for(level: ExerciseLevel) -> Vec<String> {
    let bucket = match level {
        ExerciseLevel::Low => LOW_EQUIPMENT,
        ExerciseLevel::Moderate => MODERATE_EQUIPMENT,
        ExerciseLevel::Strong => STRONG_EQUIPMENT,
    };

    let mut equipment = Vec::with_capacity(bucket.len() + 1);
    equipment.push(BASE_EQUIPMENT.to_string());
    equipment.extend(bucket.iter().map(|s| s.to_string()));
    equipment
}

pub fn diet_for(diet: DietType) -> DietPlan {
    let bucket = match diet {
        DietType::Balanced => &BALANCED_DIET,
        DietType::Vegetarian => &VEGETARIAN_DIET,
        DietType::Vegan => &VEGAN_DIET,
        DietType::Keto => &KETO_DIET,
    };

    DietPlan {
        meals: owned(&bucket.meals),
        supplements: owned(bucket.supplements),
        hydration: HYDRATION_ADVICE.to_string(),
    }
}
