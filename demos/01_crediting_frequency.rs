/// crediting frequency - monthly vs annual interest payouts
use savings_projection_rs::chrono::NaiveDate;
use savings_projection_rs::{
    AccrualStrategy, CreditingFrequency, Money, ProjectionConfig, ProjectionInput, Projector,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== crediting frequency example ===\n");

    let today = NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid date")?;

    for accrual in [AccrualStrategy::DailyActual, AccrualStrategy::FlatMonthly] {
        let projector = Projector::new(ProjectionConfig::banking().with_accrual(accrual))?;
        println!("{:?} accrual", accrual);

        for frequency in [CreditingFrequency::Monthly, CreditingFrequency::Annually] {
            let input = ProjectionInput::builder()
                .principal(Money::from_major(10_000))
                .monthly_contribution(Money::from_major(100))
                .annual_rate_percent(dec!(4.75))
                .years(5)
                .crediting(frequency)
                .build()?;

            let simulation = projector.simulate(&input, today)?;
            let result = projector.calculate(&input, today)?;

            println!(
                "  {:?}: balance {} interest {} ({} credits)",
                frequency,
                result.final_balance,
                result.total_interest_earned,
                simulation.events.credits().count()
            );
        }
    }

    Ok(())
}
