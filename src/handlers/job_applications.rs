// Job application CRUD endpoints. Every operation is scoped to the
// authenticated caller; record ids never identify a row on their own.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    app::AppState,
    middleware::auth::AuthenticatedUser,
    models::job_application::{
        CreateJobApplicationRequest, JobApplication, UpdateJobApplicationRequest,
    },
    services::JobApplicationService,
};

/// Create a job application for the caller
/// POST /api/v1/applications
#[utoipa::path(
    post,
    path = "/api/v1/applications",
    tag = "Applications",
    operation_id = "createApplication",
    request_body = CreateJobApplicationRequest,
    responses(
        (status = 201, description = "Application created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_application(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateJobApplicationRequest>,
) -> impl IntoResponse {
    let service = JobApplicationService::new(&state);

    match service.create(&user.user_id, request).await {
        Ok(id) => {
            info!("job application {} created for {}", id, user.user_id);
            (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
        },
        Err(e) => e.into_op_response("save job application"),
    }
}

/// List the caller's job applications, most recently updated first
/// GET /api/v1/applications
#[utoipa::path(
    get,
    path = "/api/v1/applications",
    tag = "Applications",
    operation_id = "listApplications",
    responses(
        (status = 200, description = "Caller's applications", body = Vec<JobApplication>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_applications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    let service = JobApplicationService::new(&state);

    match service.list_by_owner(&user.user_id).await {
        Ok(applications) => Json(applications).into_response(),
        Err(e) => e.into_op_response("load job applications"),
    }
}

/// Update one of the caller's job applications
/// PUT /api/v1/applications/{id}
#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    operation_id = "updateApplication",
    params(("id" = i32, Path, description = "Application id")),
    request_body = UpdateJobApplicationRequest,
    responses(
        (status = 200, description = "Updated application", body = JobApplication),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such record for this caller")
    )
)]
pub async fn update_application(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateJobApplicationRequest>,
) -> impl IntoResponse {
    let service = JobApplicationService::new(&state);

    match service.update(&user.user_id, id, request).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_op_response("update job application"),
    }
}

/// Delete one of the caller's job applications
/// DELETE /api/v1/applications/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    operation_id = "deleteApplication",
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such record for this caller")
    )
)]
pub async fn delete_application(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let service = JobApplicationService::new(&state);

    match service.remove(&user.user_id, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_op_response("remove job application"),
    }
}
