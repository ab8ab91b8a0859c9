/// json config - load engine configuration and input from json
use savings_projection_rs::chrono::NaiveDate;
use savings_projection_rs::{ProjectionConfig, ProjectionInput, Projector};

const CONFIG: &str = r#"{
    "accrual": "FlatMonthly",
    "start_policy": "NextMonth",
    "rounding": { "scale": 2, "mode": "HalfUp" },
    "reducer": "Last",
    "limits": null,
    "clamp_inputs": false
}"#;

const INPUT: &str = r#"{
    "principal": "2500.00",
    "monthly_contribution": "150",
    "years": 3,
    "annual_rate_percent": "3.9",
    "crediting_frequency": "Monthly"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProjectionConfig::from_json(CONFIG)?;
    let input = ProjectionInput::from_json(INPUT)?;
    let projector = Projector::new(config)?;

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?;
    let result = projector.calculate(&input, today)?;

    for (point, label) in result.series.iter().zip(&result.period_labels) {
        println!("{label}: {}", point.value);
    }

    if let Some(estimate) = projector.estimate_final_balance(&input)? {
        println!("simulated {} vs closed form {}", result.final_balance, estimate);
    }

    Ok(())
}
