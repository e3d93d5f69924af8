use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Event, EventCategory, EventPayload};
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};
use crate::views::{EventsBoard, MonthSection};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub search: Option<String>,
    pub category: Option<EventCategory>,
    pub month: Option<String>,
}

#[derive(Serialize)]
struct EventsListing {
    months: Vec<String>,
    sections: Vec<MonthSection>,
}

/// Public agenda: the whole collection fetched once, then filtered and
/// grouped in memory.
pub async fn list_public(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Response, AppError> {
    let mut board = EventsBoard::new();
    board.reload(&state.store).await?;
    if let Some(search) = query.search {
        board.set_search(search);
    }
    board.set_category(query.category);
    board.set_month(query.month);

    let listing = EventsListing {
        months: board.months(),
        sections: board.sections(),
    };
    Ok(success(listing, "Events fetched"))
}

pub async fn list_admin(State(state): State<AppState>) -> Result<Response, AppError> {
    let events: Vec<Event> = state.store.list_events().await?;
    Ok(success(events, "Events fetched"))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;
    let event = state.store.insert_event(&payload).await?;
    Ok(created(event, "Event created"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;
    match state.store.update_event(id, &payload).await? {
        Some(event) => Ok(success(event, "Event updated")),
        None => Err(AppError::NotFound(format!("Event '{id}' was not found"))),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if state.store.delete_event(id).await? {
        Ok(empty_success("Event deleted"))
    } else {
        Err(AppError::NotFound(format!("Event '{id}' was not found")))
    }
}

pub async fn toggle_featured(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.toggle_event_featured(id).await? {
        Some(event) => Ok(success(event, "Event featured flag toggled")),
        None => Err(AppError::NotFound(format!("Event '{id}' was not found"))),
    }
}
