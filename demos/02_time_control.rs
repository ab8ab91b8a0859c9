/// time control - deterministic projections with controlled time
use chrono::{Duration, TimeZone, Utc};
use savings_projection_rs::{
    CreditingFrequency, Money, ProjectionConfig, ProjectionInput, Projector, SafeTimeProvider,
    StartPolicy, TimeSource,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("savings_projection_rs=debug".parse()?))
        .init();

    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let input = ProjectionInput::builder()
        .principal(Money::from_major(5_000))
        .monthly_contribution(Money::from_major(250))
        .annual_rate_percent(dec!(5))
        .years(1)
        .crediting(CreditingFrequency::Annually)
        .build()?;

    for policy in [StartPolicy::Immediate, StartPolicy::NextMonth] {
        let projector = Projector::new(ProjectionConfig::banking().with_start_policy(policy))?;
        let result = projector.calculate_with_time(&input, &time)?;
        println!(
            "{:?} from {}: first period {}, balance {}",
            policy,
            time.now().format("%Y-%m-%d"),
            result.period_labels[0],
            result.final_balance
        );
    }

    // a year on, the february in the cycle is no longer a leap february
    controller.advance(Duration::days(365));
    let projector = Projector::default();
    let result = projector.calculate_with_time(&input, &time)?;
    println!(
        "\nadvanced to {}: balance {}",
        time.now().format("%Y-%m-%d"),
        result.final_balance
    );

    Ok(())
}
