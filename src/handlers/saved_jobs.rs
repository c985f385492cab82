// Saved job posting endpoints, scoped to the authenticated caller.

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
    models::saved_job::{CreateSavedJobRequest, SavedJob, UpdateSavedJobRequest},
    services::SavedJobService,
};

/// Save a job posting for the caller
/// POST /api/v1/saved-jobs
#[utoipa::path(
    post,
    path = "/api/v1/saved-jobs",
    tag = "Saved Jobs",
    operation_id = "createSavedJob",
    request_body = CreateSavedJobRequest,
    responses(
        (status = 201, description = "Saved job created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_saved_job(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateSavedJobRequest>,
) -> impl IntoResponse {
    let service = SavedJobService::new(&state);

    match service.create(&user.user_id, request).await {
        Ok(id) => {
            info!("saved job {} created for {}", id, user.user_id);
            (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
        },
        Err(e) => e.into_op_response("save job"),
    }
}

/// List the caller's saved jobs, most recently saved first
/// GET /api/v1/saved-jobs
#[utoipa::path(
    get,
    path = "/api/v1/saved-jobs",
    tag = "Saved Jobs",
    operation_id = "listSavedJobs",
    responses(
        (status = 200, description = "Caller's saved jobs", body = Vec<SavedJob>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_saved_jobs(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    let service = SavedJobService::new(&state);

    match service.list_by_owner(&user.user_id).await {
        Ok(saved_jobs) => Json(saved_jobs).into_response(),
        Err(e) => e.into_op_response("load saved jobs"),
    }
}

/// Update one of the caller's saved jobs
/// PUT /api/v1/saved-jobs/{id}
#[utoipa::path(
    put,
    path = "/api/v1/saved-jobs/{id}",
    tag = "Saved Jobs",
    operation_id = "updateSavedJob",
    params(("id" = i32, Path, description = "Saved job id")),
    request_body = UpdateSavedJobRequest,
    responses(
        (status = 200, description = "Updated saved job", body = SavedJob),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such record for this caller")
    )
)]
pub async fn update_saved_job(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSavedJobRequest>,
) -> impl IntoResponse {
    let service = SavedJobService::new(&state);

    match service.update(&user.user_id, id, request).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_op_response("update saved job"),
    }
}

/// Delete one of the caller's saved jobs
/// DELETE /api/v1/saved-jobs/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/saved-jobs/{id}",
    tag = "Saved Jobs",
    operation_id = "deleteSavedJob",
    params(("id" = i32, Path, description = "Saved job id")),
    responses(
        (status = 204, description = "Saved job deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such record for this caller")
    )
)]
pub async fn delete_saved_job(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let service = SavedJobService::new(&state);

    match service.remove(&user.user_id, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_op_response("remove saved job"),
    }
}
