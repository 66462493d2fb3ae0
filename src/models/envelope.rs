use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::reading::{WeatherReading, generate_readings};

/// Body of a `/weather` response. Successful statuses carry readings, every
/// other status only a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherEnvelope {
    Readings {
        readings: Vec<WeatherReading>,
        message: String,
    },
    Failure {
        message: String,
    },
}

impl WeatherEnvelope {
    pub fn for_status<R: Rng + ?Sized>(
        status: StatusCode,
        size: usize,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> WeatherEnvelope {
        if status.is_success() {
            let readings = generate_readings(rng, now, size);
            WeatherEnvelope::Readings {
                message: format!(
                    "Successfully retrieved {} weather readings.",
                    readings.len()
                ),
                readings,
            }
        } else {
            WeatherEnvelope::Failure {
                message: format!(
                    "An error occurred with status code {}. This is a dummy error for testing.",
                    status.as_u16()
                ),
            }
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
