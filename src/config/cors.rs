use axum::http::{header, HeaderName, HeaderValue, Method};
use std::env;
use tower_http::cors::{AllowOrigin, CorsLayer};

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// The public site and the mail endpoints are served to arbitrary origins,
/// so the default is a fully open policy. Setting CORS_ALLOWED_ORIGINS to a
/// comma-separated list restricts it (and enables credentials, which an open
/// policy cannot carry).
pub fn create_cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS));

    match configured_origins() {
        Some(origins) => {
            tracing::info!("CORS: restricted to {} configured origin(s)", origins.len());
            layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_credentials(true)
        }
        None => {
            tracing::info!("CORS: open policy (no origins configured)");
            layer.allow_origin(AllowOrigin::any())
        }
    }
}

fn configured_origins() -> Option<Vec<HeaderValue>> {
    let origins_str = env::var("CORS_ALLOWED_ORIGINS").ok()?;

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|origin| {
            let trimmed = origin.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_layer() {
        // Should not panic when creating the CORS layer
        let _layer = create_cors_layer();
    }

    #[test]
    fn localhost_origin_parses_as_header_value() {
        assert!("http://localhost:5173".parse::<HeaderValue>().is_ok());
    }
}
