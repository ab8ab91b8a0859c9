/// raw input - clamping and validating form values
use savings_projection_rs::chrono::NaiveDate;
use savings_projection_rs::{CreditingFrequency, ProjectionConfig, Projector, RawProjectionInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?;
    let projector = Projector::new(ProjectionConfig::banking().with_ui_limits())?;

    let over_limit = RawProjectionInput {
        principal: 25_000_000.0,
        monthly_contribution: 500.0,
        years: 250,
        annual_rate_percent: 4.0,
        crediting_frequency: CreditingFrequency::Monthly,
    };

    let result = projector.calculate_raw(&over_limit, today)?;
    println!("clamped projection: {} over {} points", result.final_balance, result.series.len());

    let rejected = [
        RawProjectionInput { principal: f64::NAN, ..over_limit },
        RawProjectionInput { years: 0, ..over_limit },
        RawProjectionInput { years: -2, ..over_limit },
    ];

    for raw in rejected {
        match projector.calculate_raw(&raw, today) {
            Ok(result) => println!("unexpected result: {}", result.final_balance),
            Err(e) => println!("rejected: {e}"),
        }
    }

    Ok(())
}
