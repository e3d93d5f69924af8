//! The mail-sending endpoints. Unlike the workflow handlers, these report
//! delivery failures to the caller: the response carries the provider's
//! message so the admin screen can show why a resend failed.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mail::AssociateMailAction;
use crate::models::{Associate, EventRequest};
use crate::utils::error::AppError;
use crate::utils::response::success;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMailBody {
    pub request_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateMailBody {
    pub associate_id: Uuid,
    pub action: AssociateMailAction,
}

#[derive(Serialize)]
struct MailOutcome {
    sent: bool,
}

async fn fetch_request(state: &AppState, id: Uuid) -> Result<EventRequest, AppError> {
    state
        .store
        .get_event_request(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event request '{id}' was not found")))
}

async fn fetch_associate(state: &AppState, id: Uuid) -> Result<Associate, AppError> {
    state
        .store
        .get_associate(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Associate '{id}' was not found")))
}

pub async fn send_admin_notification(
    State(state): State<AppState>,
    Json(body): Json<RequestMailBody>,
) -> Result<Response, AppError> {
    let request = fetch_request(&state, body.request_id).await?;
    state.mailer.send_admin_notification(&request).await?;
    Ok(success(MailOutcome { sent: true }, "Notification sent"))
}

pub async fn send_confirmation(
    State(state): State<AppState>,
    Json(body): Json<RequestMailBody>,
) -> Result<Response, AppError> {
    let request = fetch_request(&state, body.request_id).await?;
    state.mailer.send_confirmation(&request).await?;
    Ok(success(MailOutcome { sent: true }, "Confirmation sent"))
}

pub async fn send_approval(
    State(state): State<AppState>,
    Json(body): Json<RequestMailBody>,
) -> Result<Response, AppError> {
    let request = fetch_request(&state, body.request_id).await?;
    state.mailer.send_approval(&request).await?;
    Ok(success(MailOutcome { sent: true }, "Approval email sent"))
}

pub async fn send_rejection(
    State(state): State<AppState>,
    Json(body): Json<RequestMailBody>,
) -> Result<Response, AppError> {
    let request = fetch_request(&state, body.request_id).await?;
    let Some(reason) = request.rejection_reason.clone().filter(|r| !r.trim().is_empty()) else {
        return Err(AppError::ValidationError(
            "Event request has no rejection reason on record".to_string(),
        ));
    };
    state.mailer.send_rejection(&request, &reason).await?;
    Ok(success(MailOutcome { sent: true }, "Rejection email sent"))
}

pub async fn send_associate_email(
    State(state): State<AppState>,
    Json(body): Json<AssociateMailBody>,
) -> Result<Response, AppError> {
    let associate = fetch_associate(&state, body.associate_id).await?;
    state
        .mailer
        .send_associate_email(&associate, body.action)
        .await?;
    Ok(success(MailOutcome { sent: true }, "Associate email sent"))
}
