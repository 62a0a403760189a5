use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{
    ActivityDispatcher, HttpNotifier, PgActivityLog, PgFormRepository, PgPermissionChecker,
    PgProjectRepository, PgTokenRepository, PgUserRepository,
};
use application::MessageService;
use fieldnote::{TargetRegistry, TokenRepository};

/// Type alias for the application service with the concrete activity store
pub type AppMessageService = MessageService<ActivityDispatcher>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<AppMessageService>,
    pub tokens: Arc<dyn TokenRepository>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Fieldnote API is running - messages flow into the activity stream".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("📨 Fieldnote API initializing...");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // One lookup repository per target type
    let registry = TargetRegistry::new()
        .register(Arc::new(PgFormRepository::new(pool.clone())))
        .register(Arc::new(PgProjectRepository::new(pool.clone())))
        .register(Arc::new(PgUserRepository::new(pool.clone())));

    let permissions = Arc::new(PgPermissionChecker::new(pool.clone()));
    let activity_log = Arc::new(PgActivityLog::new(pool.clone()));

    // Canonical log first, then best-effort observers
    let mut dispatcher = ActivityDispatcher::new().with_log(activity_log.clone());

    match std::env::var("FIELDNOTE_NOTIFY_URL") {
        Ok(url) if !url.is_empty() => {
            let mut notifier = HttpNotifier::new(url);
            if let Ok(secret) = std::env::var("FIELDNOTE_NOTIFY_SECRET") {
                notifier = notifier.with_secret(secret);
            }
            dispatcher = dispatcher.with_observer(Arc::new(notifier));
            tracing::info!("🔔 Activity notifier enabled");
        }
        _ => {
            tracing::warn!("⚠️  No FIELDNOTE_NOTIFY_URL set - activity notifications disabled");
        }
    }

    let message_service = Arc::new(MessageService::new(
        registry,
        permissions,
        Arc::new(dispatcher),
        activity_log,
    ));
    let tokens: Arc<dyn TokenRepository> = Arc::new(PgTokenRepository::new(pool));

    tracing::info!("🔐 API token authentication enabled");

    // Create application state
    let state = AppState {
        message_service,
        tokens,
    };

    // Protected routes (require an API token)
    let protected_routes = Router::new()
        .merge(routes::messaging::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr =
        std::env::var("FIELDNOTE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Fieldnote API ready on {}", bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
