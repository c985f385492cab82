// OpenAPI document assembled from the per-handler path annotations.

use axum::{extract::State, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::app::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobtrack Backend API",
        description = "Job application tracker API: applications, saved postings and dashboard statistics",
        version = "1.0.0"
    ),
    paths(
        crate::handlers::job_applications::create_application,
        crate::handlers::job_applications::list_applications,
        crate::handlers::job_applications::update_application,
        crate::handlers::job_applications::delete_application,
        crate::handlers::saved_jobs::create_saved_job,
        crate::handlers::saved_jobs::list_saved_jobs,
        crate::handlers::saved_jobs::update_saved_job,
        crate::handlers::saved_jobs::delete_saved_job,
        crate::handlers::dashboard::dashboard_stats,
    ),
    components(schemas(
        crate::models::job_application::JobApplication,
        crate::models::job_application::CreateJobApplicationRequest,
        crate::models::job_application::UpdateJobApplicationRequest,
        crate::models::saved_job::SavedJob,
        crate::models::saved_job::CreateSavedJobRequest,
        crate::models::saved_job::UpdateSavedJobRequest,
        crate::models::enums::ApplicationStatus,
        crate::models::enums::JobType,
        crate::models::enums::InterviewType,
        crate::services::dashboard::DashboardStats,
    )),
    tags(
        (name = "Applications", description = "Job application tracking"),
        (name = "Saved Jobs", description = "Saved job postings"),
        (name = "Dashboard", description = "Aggregated per-user statistics")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI JSON specification at /v1/docs/openapi.json
pub async fn serve_openapi_spec(State(_app_state): State<AppState>) -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
