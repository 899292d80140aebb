//! BMI command

use anyhow::Result;
use wellness_core::{calculate_bmi, BmiRequest};

use crate::client::ApiClient;
use crate::output::{color_status, print_json, OutputFormat};

pub async fn run(
    client: &ApiClient,
    weight: f64,
    height: f64,
    local: bool,
    format: OutputFormat,
) -> Result<()> {
    let request = BmiRequest {
        weight_kg: weight,
        height_cm: height,
    };

    let result = if local {
        calculate_bmi(&request)?
    } else {
        client.bmi(&request).await?
    };

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            println!(
                "BMI: {:.1} ({})",
                result.bmi,
                color_status(result.category.as_str())
            );
        }
    }

    Ok(())
}
