// HTTP handlers and route tables

pub mod dashboard;
pub mod docs;
pub mod job_applications;
pub mod saved_jobs;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app::AppState;

/// Job application CRUD routes
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            post(job_applications::create_application).get(job_applications::list_applications),
        )
        .route(
            "/applications/{id}",
            axum::routing::put(job_applications::update_application)
                .delete(job_applications::delete_application),
        )
}

/// Saved job posting routes
pub fn saved_job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/saved-jobs",
            post(saved_jobs::create_saved_job).get(saved_jobs::list_saved_jobs),
        )
        .route(
            "/saved-jobs/{id}",
            axum::routing::put(saved_jobs::update_saved_job).delete(saved_jobs::delete_saved_job),
        )
}

/// Dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(dashboard::dashboard_stats))
}
