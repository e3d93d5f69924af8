use axum::response::Response;
use serde::Serialize;

use crate::utils::response::success;

pub mod associates;
pub mod event_requests;
pub mod events;
pub mod locations;
pub mod mail;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "bureau-api",
    };

    success(payload, "Health check successful")
}
