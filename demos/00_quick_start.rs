/// quick start - minimal example to get started
use savings_projection_rs::chrono::NaiveDate;
use savings_projection_rs::{CreditingFrequency, Decimal, Money, ProjectionConfig, ProjectionInput, Projector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // save £100 a month on top of £10,000 at 5%
    let input = ProjectionInput::builder()
        .principal(Money::from_major(10_000))
        .monthly_contribution(Money::from_major(100))
        .annual_rate_percent(Decimal::from(5))
        .years(10)
        .crediting(CreditingFrequency::Monthly)
        .build()?;

    let projector = Projector::new(ProjectionConfig::banking())?;
    let today = NaiveDate::from_ymd_opt(2024, 10, 19).ok_or("invalid date")?;

    let result = projector.calculate(&input, today)?;

    println!("final balance: {}", result.final_balance);
    println!("interest earned: {}", result.total_interest_earned);
    println!("{}", result.to_json_pretty()?);

    Ok(())
}
