//! Questionnaire scoring command

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tabled::Tabled;
use wellness_core::{
    CategoryPolicy, HealthPredictor, PredictionRequest, PredictionResult, Predictor,
};

use crate::client::ApiClient;
use crate::output::{color_risk, print_json, print_warning, OutputFormat};

/// Questionnaire answers. Defaults match the dashboard form.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Read the questionnaire from a JSON file instead of flags
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Score locally instead of calling the service
    #[arg(long)]
    pub local: bool,

    #[arg(long, default_value_t = 25.0)]
    pub age: f64,

    /// Hours of sleep per night
    #[arg(long, default_value_t = 7.0)]
    pub sleep_hours: f64,

    #[arg(long, default_value_t = 40.0)]
    pub work_hours: f64,

    /// Hours of screen time per day
    #[arg(long, default_value_t = 6.0)]
    pub screen_time: f64,

    /// Social interaction score (1-10)
    #[arg(long, default_value_t = 7.0)]
    pub social_score: f64,

    /// Happiness score (1-10)
    #[arg(long, default_value_t = 8.0)]
    pub happiness_score: f64,

    /// Male, Female or Other
    #[arg(long, default_value = "Male")]
    pub gender: String,

    /// Low, Moderate or Strong
    #[arg(long, default_value = "Moderate")]
    pub exercise_level: String,

    /// Balanced, Vegetarian, Vegan or Keto
    #[arg(long, default_value = "Balanced")]
    pub diet_type: String,

    /// Low, Medium or High
    #[arg(long, default_value = "Low")]
    pub stress_level: String,
}

impl PredictArgs {
    fn to_request(&self) -> Result<PredictionRequest> {
        if let Some(path) = &self.input {
            let body = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return PredictionRequest::from_json(&body)
                .with_context(|| format!("Invalid questionnaire in {}", path.display()));
        }

        Ok(PredictionRequest {
            age: self.age,
            sleep_hours: self.sleep_hours,
            work_hours_per_week: self.work_hours,
            screen_time_per_day: self.screen_time,
            social_interaction_score: self.social_score,
            happiness_score: self.happiness_score,
            gender: self.gender.clone(),
            exercise_level: self.exercise_level.clone(),
            diet_type: self.diet_type.clone(),
            stress_level: self.stress_level.clone(),
        })
    }
}

#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Recommendation")]
    item: String,
}

fn score_locally(request: &PredictionRequest) -> Result<PredictionResult> {
    for unrecognized in request.unrecognized_fields() {
        print_warning(&format!(
            "Unrecognized {} '{}', using default recommendations",
            unrecognized.field, unrecognized.value
        ));
    }

    let input = request.to_input(CategoryPolicy::Permissive)?;
    Ok(HealthPredictor::new().predict(&input).result)
}

/// Score a questionnaire, locally or through the service
pub async fn run(client: &ApiClient, args: PredictArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request()?;

    let result = if args.local {
        score_locally(&request)?
    } else {
        client.predict(&request).await?
    };

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => print_table(&result),
    }

    Ok(())
}

fn recommendation_rows(result: &PredictionResult) -> Vec<RecommendationRow> {
    let rec = &result.recommendations;
    let sections: [(&'static str, &[String]); 4] = [
        ("Exercise", rec.exercises.as_slice()),
        ("Equipment", rec.equipment.as_slice()),
        ("Meal", rec.diet.meals.as_slice()),
        ("Supplement", rec.diet.supplements.as_slice()),
    ];

    let mut rows: Vec<RecommendationRow> = sections
        .iter()
        .flat_map(|&(category, items)| {
            items.iter().map(move |item| RecommendationRow {
                category,
                item: item.clone(),
            })
        })
        .collect();
    rows.push(RecommendationRow {
        category: "Hydration",
        item: rec.diet.hydration.clone(),
    });
    rows
}

fn print_table(result: &PredictionResult) {
    let mental = &result.mental_health;
    println!(
        "{} {} ({})",
        "Mental health risk:".bold(),
        color_risk(mental.risk),
        mental.message
    );
    println!();

    let table = tabled::Table::new(recommendation_rows(result))
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}", table);
}
