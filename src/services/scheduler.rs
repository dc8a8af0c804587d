use chrono::{DateTime, Days, Utc};
use std::time::Duration;

use crate::modules::flights::{seed::FLIGHTS_PER_RUN, service::FlightSeeder};

/// Seeds flights once a day at 00:00 UTC, forever.
/// A failed run is logged and the next one is still scheduled.
pub async fn run_daily_seeding(seeder: FlightSeeder) {
    tracing::info!("daily flight seeding scheduled");

    loop {
        let wait = until_next_midnight(Utc::now());
        tracing::debug!(seconds = wait.as_secs(), "waiting for next seeding run");
        tokio::time::sleep(wait).await;

        match seeder.seed_flights(FLIGHTS_PER_RUN).await {
            Ok(count) => tracing::info!(count, "scheduled flight seeding finished"),
            Err(e) => tracing::warn!(error = %e, "scheduled flight seeding failed"),
        }
    }
}

/// Time left until the next 00:00 UTC strictly after `now`.
pub fn until_next_midnight(now: DateTime<Utc>) -> Duration {
    let next = now
        .date_naive()
        .checked_add_days(Days::new(1))
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc());

    match next {
        Some(next) => (next - now).to_std().unwrap_or(Duration::from_secs(1)),
        None => Duration::from_secs(24 * 60 * 60),
    }
}
