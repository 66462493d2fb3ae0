use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

pub const CITIES: [&str; 8] = [
    "New York",
    "London",
    "Tokyo",
    "Sydney",
    "Paris",
    "Berlin",
    "Moscow",
    "Toronto",
];

pub const CONDITIONS: [&str; 7] = [
    "Sunny", "Cloudy", "Rainy", "Snowy", "Windy", "Foggy", "Stormy",
];

pub const MIN_TEMPERATURE: f64 = 5.0;
pub const MAX_TEMPERATURE: f64 = 40.0;
pub const MIN_HUMIDITY: u8 = 20;
pub const MAX_HUMIDITY: u8 = 99;
/// Readings are stamped up to this far before or after the time of the request.
pub const MAX_TIMESTAMP_OFFSET_SECONDS: i64 = 12 * 60 * 60;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius, rounded to two decimals.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub condition: String,
}

pub fn generate_reading<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> WeatherReading {
    let offset = rng.random_range(-MAX_TIMESTAMP_OFFSET_SECONDS..=MAX_TIMESTAMP_OFFSET_SECONDS);
    let temperature = rng.random_range(MIN_TEMPERATURE..=MAX_TEMPERATURE);
    WeatherReading {
        city: pick(rng, &CITIES),
        timestamp: now + Duration::seconds(offset),
        temperature: round_to_hundredths(temperature),
        humidity: rng.random_range(MIN_HUMIDITY..=MAX_HUMIDITY),
        condition: pick(rng, &CONDITIONS),
    }
}

pub fn generate_readings<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<WeatherReading> {
    (0..count).map(|_| generate_reading(rng, now)).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    // Both lists are non-empty constants.
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
