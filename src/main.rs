use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use bureau_server::config::Config;
use bureau_server::mail::Mailer;
use bureau_server::media::MediaStore;
use bureau_server::models::Location;
use bureau_server::routes::create_routes;
use bureau_server::store::Store;
use bureau_server::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bureau_server=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let locations = match Location::load_from_file(&config.locations_file) {
        Ok(locations) => {
            tracing::info!(count = locations.len(), "Loaded points-of-interest dataset");
            locations
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                path = %config.locations_file.display(),
                "Points-of-interest dataset unavailable, serving an empty list"
            );
            Vec::new()
        }
    };

    let mailer = Mailer::from_config(&config);
    let media = MediaStore::new(config.media_root.clone(), config.public_url.clone());

    let state = AppState {
        store: Store::new(pool),
        mailer: Arc::new(mailer),
        media,
        locations: Arc::new(locations),
        admin_token: config.admin_token.clone().map(Arc::from),
    };

    let app: Router = create_routes(state);

    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
