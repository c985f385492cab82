// Dashboard statistics endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    app::AppState,
    middleware::auth::AuthenticatedUser,
    services::{DashboardService, DashboardStats},
};

/// Per-caller dashboard counters
/// GET /api/v1/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    tag = "Dashboard",
    operation_id = "dashboardStats",
    responses(
        (status = 200, description = "Caller's counters", body = DashboardStats),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> impl IntoResponse {
    let service = DashboardService::new(&state);

    match service.stats(&user.user_id).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => e.into_op_response("retrieve dashboard statistics"),
    }
}
