// Jobtrack backend entry point: config, pool, migrations, router.

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobtrack_backend_core::{
    app_config, handlers, health_check, initialize_app_state, middleware,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("jobtrack_backend_core=debug,tower_http=info")
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::config();
    info!(
        "Starting jobtrack-backend ({} environment)",
        config.environment
    );

    let state = initialize_app_state().await?;

    // Owner-scoped routes sit behind the session middleware; health and
    // docs stay public.
    let protected = Router::new()
        .merge(handlers::application_routes())
        .merge(handlers::saved_job_routes())
        .merge(handlers::dashboard_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ));

    let app = Router::new()
        .nest("/api/v1", protected)
        .route("/api/v1/health", get(health_check))
        .route("/v1/docs/openapi.json", get(handlers::docs::serve_openapi_spec))
        .layer(axum_middleware::from_fn(middleware::dynamic_cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.bind_address, config.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
