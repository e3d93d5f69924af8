use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::utils::error::AppError;
use crate::utils::response::success;
use crate::views::filter_locations;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LocationsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Points of interest, from the dataset loaded at boot.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> Result<Response, AppError> {
    let filtered = filter_locations(
        &state.locations,
        query.search.as_deref().unwrap_or_default(),
        query.category.as_deref(),
    );
    Ok(success(filtered, "Locations fetched"))
}
