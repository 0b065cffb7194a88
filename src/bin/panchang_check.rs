//! Binary to fetch Panchang data for a city from the configured upstream and
//! print it, for inspecting live responses.
//!
//! # Usage
//!
//! ```sh
//! export PANCHANG_API_BASE_URL="https://panchang.internal"
//! export PANCHANG_API_KEY="your-api-key"   # optional
//! cargo run --bin panchang_check --features cli -- new-delhi 2025-10-20
//! cargo run --bin panchang_check --features cli -- mumbai 2025-10-18 2025-10-19 2025-10-20
//! ```
//!
//! With no dates, today's Panchang is fetched. Press Ctrl-C to abort a batch.

use std::env;

use panchang_gateway::types::PanchangKey;
use panchang_gateway::types::request::DATE_FORMAT;
use panchang_gateway::{PanchangClient, PanchangError, cities};

#[tokio::main]
async fn main() -> panchang_gateway::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let slug = args.next().unwrap_or_else(|| "new-delhi".to_owned());
    let dates: Vec<String> = args.collect();

    let city = cities::find(&slug)
        .ok_or_else(|| PanchangError::InvalidArgument(format!("unknown city {slug:?}")))?;
    let client = PanchangClient::from_env()?;
    println!(
        "Using {} for {}, {}",
        client.config().base_url,
        city.name,
        city.state
    );

    if dates.len() <= 1 {
        let date = dates
            .into_iter()
            .next()
            .unwrap_or_else(|| chrono::Local::now().date_naive().format(DATE_FORMAT).to_string());
        let result = client
            .fetch_one(&PanchangKey::new(date, city.location()))
            .await?;
        println!("{result:#?}");
        return Ok(());
    }

    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let results = client
        .fetch_batch_until(&dates, &city.location(), ctrl_c)
        .await?;

    for date in &dates {
        match results.get(date) {
            Some(p) => println!(
                "{date}  {:>5.1}  {:<12} {} ({:?})  Rahu Kaal {}–{}",
                p.day_quality.score,
                p.day_quality.label,
                p.panchang.tithi.name,
                p.panchang.tithi.paksha,
                p.muhurta.rahu_kaal.start,
                p.muhurta.rahu_kaal.end,
            ),
            None => println!("{date}  unavailable"),
        }
    }
    Ok(())
}
