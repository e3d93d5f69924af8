use axum::middleware;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{associates, event_requests, events, health_check, locations, mail};
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    let admin = Router::new()
        .route("/events", get(events::list_admin).post(events::create))
        .route("/events/:id", put(events::update).delete(events::remove))
        .route("/events/:id/featured", patch(events::toggle_featured))
        .route("/event-requests", get(event_requests::list))
        .route("/event-requests/:id/approve", post(event_requests::approve))
        .route("/event-requests/:id/reject", post(event_requests::reject))
        .route("/associates", get(associates::list_admin))
        .route("/associates/:id/approve", post(associates::approve))
        .route("/associates/:id/reject", post(associates::reject))
        .route("/associates/:id", delete(associates::remove))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    let mail_senders = Router::new()
        .route("/send-admin-notification", post(mail::send_admin_notification))
        .route("/send-confirmation", post(mail::send_confirmation))
        .route("/send-approval", post(mail::send_approval))
        .route("/send-rejection", post(mail::send_rejection))
        .route("/send-associate-email", post(mail::send_associate_email));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/events", get(events::list_public))
        .route("/api/locations", get(locations::list))
        .route("/api/event-requests", post(event_requests::submit))
        .route(
            "/api/associates",
            get(associates::directory).post(associates::submit),
        )
        .nest("/api/admin", admin)
        .nest("/api/mail", mail_senders)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
