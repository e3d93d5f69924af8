use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mail;
use crate::models::{EventRequestPayload, ReviewStatus};
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::workflow;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RequestsQuery {
    pub status: Option<ReviewStatus>,
}

#[derive(Serialize)]
struct ReviewOutcome {
    applied: bool,
}

/// Public submission. The pending record is persisted first; both
/// notification emails are best-effort afterwards.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<EventRequestPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;
    let request = state.store.insert_event_request(&payload).await?;

    mail::log_failure(
        state.mailer.send_admin_notification(&request).await,
        "admin notification",
    );
    mail::log_failure(
        state.mailer.send_confirmation(&request).await,
        "submission confirmation",
    );

    Ok(created(request, "Event request submitted"))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RequestsQuery>,
) -> Result<Response, AppError> {
    let mut requests = state.store.list_event_requests().await?;
    if let Some(status) = query.status {
        requests.retain(|request| request.status == status);
    }
    Ok(success(requests, "Event requests fetched"))
}

/// Publishes the event and marks the request approved in one transaction;
/// the approval email goes out only after the transition committed.
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let approved = workflow::approve_event_request(&state.store, id).await?;

    if approved {
        if let Some(request) = state.store.get_event_request(id).await? {
            mail::log_failure(state.mailer.send_approval(&request).await, "approval email");
        }
        Ok(success(
            ReviewOutcome { applied: true },
            "Event request approved",
        ))
    } else {
        Ok(success(
            ReviewOutcome { applied: false },
            "Event request was not pending",
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct RejectBody {
    pub reason: Option<String>,
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RejectBody>,
) -> Result<Response, AppError> {
    let reason = body.reason.as_deref().map(str::trim).unwrap_or_default();
    if reason.is_empty() {
        return Err(AppError::ValidationError(
            "A rejection reason is required".to_string(),
        ));
    }

    let rejected = workflow::reject_event_request(&state.store, id, reason).await?;

    if rejected {
        if let Some(request) = state.store.get_event_request(id).await? {
            mail::log_failure(
                state.mailer.send_rejection(&request, reason).await,
                "rejection email",
            );
        }
        Ok(success(
            ReviewOutcome { applied: true },
            "Event request rejected",
        ))
    } else {
        Ok(success(
            ReviewOutcome { applied: false },
            "Event request was not pending",
        ))
    }
}
