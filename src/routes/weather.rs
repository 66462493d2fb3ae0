use axum::extract::Query;
use axum::response::Response;
use chrono::Utc;
use rand::Rng;
use tokio::time::Duration;

use crate::models::envelope::WeatherEnvelope;
use crate::models::status::{StatusClass, select_status};

pub const DEFAULT_SIZE: usize = 10;
pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 100;
pub const MAX_DELAY_MS: u64 = 5000;

/// Number of readings to generate. Anything missing, unparsable or outside
/// `MIN_SIZE..=MAX_SIZE` falls back to `DEFAULT_SIZE`, not to the nearest bound.
pub fn effective_size(size: Option<&str>) -> usize {
    let Some(raw) = size else {
        log::debug!("No size given, using {}", DEFAULT_SIZE);
        return DEFAULT_SIZE;
    };
    match raw.trim().parse::<i64>() {
        Ok(size) if (MIN_SIZE as i64..=MAX_SIZE as i64).contains(&size) => size as usize,
        Ok(size) => {
            log::debug!(
                "Size {} outside {}..={}, using {}",
                size,
                MIN_SIZE,
                MAX_SIZE,
                DEFAULT_SIZE
            );
            DEFAULT_SIZE
        }
        Err(err) => {
            log::debug!("Invalid size {:?} ({}), using {}", raw, err, DEFAULT_SIZE);
            DEFAULT_SIZE
        }
    }
}

async fn simulate_latency() {
    let delay = Duration::from_millis(rand::rng().random_range(0..=MAX_DELAY_MS));
    log::debug!("Delaying response by {:?}", delay);
    tokio::time::sleep(delay).await;
}

// Collected as raw pairs: a repeated or malformed `size` must not reject the request.
// The first `size` wins.
pub async fn get_weather(Query(params): Query<Vec<(String, String)>>) -> Response {
    let size = effective_size(
        params
            .iter()
            .find(|(key, _)| key == "size")
            .map(|(_, value)| value.as_str()),
    );

    simulate_latency().await;

    let mut rng = rand::rng();
    let status = select_status(&mut rng);
    log::debug!(
        "Answering weather request with {} ({:?})",
        status,
        StatusClass::of(status)
    );
    WeatherEnvelope::for_status(status, size, &mut rng, Utc::now()).into_response_with(status)
}
