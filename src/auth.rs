use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::utils::error::AppError;
use crate::AppState;

/// Gate for the back-office routes: a bearer token from the environment.
/// With no token configured the admin area stays closed.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Err(AppError::AuthError(
            "Admin access is not configured".to_string(),
        ));
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if bearer_token_matches(presented, expected) {
        Ok(next.run(request).await)
    } else {
        Err(AppError::AuthError(
            "A valid admin token is required".to_string(),
        ))
    }
}

fn bearer_token_matches(header: Option<&str>, expected: &str) -> bool {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_matching_bearer_token_passes() {
        assert!(bearer_token_matches(Some("Bearer s3cret"), "s3cret"));
        assert!(!bearer_token_matches(Some("Bearer wrong"), "s3cret"));
        assert!(!bearer_token_matches(Some("s3cret"), "s3cret"));
        assert!(!bearer_token_matches(None, "s3cret"));
    }
}
