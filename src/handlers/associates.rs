use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mail::{self, AssociateMailAction};
use crate::models::{AssociatePayload, ReviewStatus};
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};
use crate::views::AssociateDirectory;
use crate::workflow;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub status: Option<ReviewStatus>,
}

#[derive(Serialize)]
struct ReviewOutcome {
    applied: bool,
}

/// Public application form target.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<AssociatePayload>,
) -> Result<Response, AppError> {
    payload.validate()?;
    let associate = state.store.insert_associate(&payload).await?;

    mail::log_failure(
        state
            .mailer
            .send_associate_email(&associate, AssociateMailAction::New)
            .await,
        "associate application notification",
    );

    Ok(created(associate, "Associate application submitted"))
}

/// Public directory: approved members, searched, categorised, paginated.
pub async fn directory(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Response, AppError> {
    let mut directory = AssociateDirectory::new();
    directory.reload(&state.store).await?;
    if let Some(search) = query.search {
        directory.set_search(search);
    }
    directory.set_category(query.category);
    if let Some(page) = query.page {
        directory.set_page(page);
    }

    Ok(success(directory.visible(), "Associates fetched"))
}

pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Response, AppError> {
    let mut associates = state.store.list_associates().await?;
    if let Some(status) = query.status {
        associates.retain(|associate| associate.status == status);
    }
    Ok(success(associates, "Associates fetched"))
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match workflow::approve_associate(&state.store, id).await? {
        Some(associate) => {
            mail::log_failure(
                state
                    .mailer
                    .send_associate_email(&associate, AssociateMailAction::Approved)
                    .await,
                "associate approval email",
            );
            Ok(success(associate, "Associate approved"))
        }
        None => Ok(success(
            ReviewOutcome { applied: false },
            "Associate was not updated",
        )),
    }
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match workflow::reject_associate(&state.store, id).await? {
        Some(associate) => {
            mail::log_failure(
                state
                    .mailer
                    .send_associate_email(&associate, AssociateMailAction::Rejected)
                    .await,
                "associate rejection email",
            );
            Ok(success(associate, "Associate rejected"))
        }
        None => Ok(success(
            ReviewOutcome { applied: false },
            "Associate was not updated",
        )),
    }
}

/// Hard delete; the stored logo goes first, best-effort.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if workflow::delete_associate(&state.store, &state.media, id).await? {
        Ok(empty_success("Associate deleted"))
    } else {
        Err(AppError::NotFound(format!("Associate '{id}' was not found")))
    }
}
