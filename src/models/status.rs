use axum::http::StatusCode;
use rand::Rng;
use rand::seq::IndexedRandom;

pub const SUCCESS_CODES: [StatusCode; 4] = [
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
];

pub const CLIENT_ERROR_CODES: [StatusCode; 5] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::METHOD_NOT_ALLOWED,
];

pub const SERVER_ERROR_CODES: [StatusCode; 5] = [
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::NOT_IMPLEMENTED,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Draws in `0..SUCCESS_CUTOFF` pick a 2xx code, `SUCCESS_CUTOFF..CLIENT_ERROR_CUTOFF`
/// a 4xx code and the rest of `0..100` a 5xx code.
const SUCCESS_CUTOFF: u32 = 70;
const CLIENT_ERROR_CUTOFF: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
}

impl StatusClass {
    /// Maps a draw from `0..100` onto its class using the 70/15/15 split.
    pub fn from_draw(draw: u32) -> StatusClass {
        if draw < SUCCESS_CUTOFF {
            StatusClass::Success
        } else if draw < CLIENT_ERROR_CUTOFF {
            StatusClass::ClientError
        } else {
            StatusClass::ServerError
        }
    }

    pub fn of(status: StatusCode) -> Option<StatusClass> {
        if status.is_success() {
            Some(StatusClass::Success)
        } else if status.is_client_error() {
            Some(StatusClass::ClientError)
        } else if status.is_server_error() {
            Some(StatusClass::ServerError)
        } else {
            None
        }
    }

    pub fn codes(&self) -> &'static [StatusCode] {
        match self {
            StatusClass::Success => &SUCCESS_CODES,
            StatusClass::ClientError => &CLIENT_ERROR_CODES,
            StatusClass::ServerError => &SERVER_ERROR_CODES,
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> StatusCode {
        self.codes()
            .choose(rng)
            .copied()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Weighted class draw followed by a uniform draw within the class.
pub fn select_status<R: Rng + ?Sized>(rng: &mut R) -> StatusCode {
    StatusClass::from_draw(rng.random_range(0..100)).pick(rng)
}
