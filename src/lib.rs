use std::sync::Arc;

use crate::mail::Mailer;
use crate::media::MediaStore;
use crate::models::Location;
use crate::store::Store;

pub mod auth;
pub mod config;
pub mod handlers;
pub mod mail;
pub mod media;
pub mod models;
pub mod routes;
pub mod store;
pub mod utils;
pub mod views;
pub mod workflow;

/// Shared handler state: database access, mail dispatch, media cleanup and
/// the points-of-interest dataset loaded once at boot.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub mailer: Arc<Mailer>,
    pub media: MediaStore,
    pub locations: Arc<Vec<Location>>,
    pub admin_token: Option<Arc<str>>,
}
