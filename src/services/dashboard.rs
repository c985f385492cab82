// Dashboard statistics: three per-owner counters in two scoped queries.
// The queries are independent read-only counts; no atomicity is required
// between them.

use diesel::dsl::{count_star, sql};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel_async::RunQueryDsl;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{
    app::AppState, db::DieselPool, models::enums::ApplicationStatus,
    utils::service_error::ServiceError,
};

/// Per-owner dashboard counters. totalApplications >= totalInterviews holds
/// by construction: the interview counter is a filtered subset of the same
/// scoped count.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: i64,
    pub total_saved_jobs: i64,
    pub total_interviews: i64,
}

pub struct DashboardService {
    pool: DieselPool,
}

impl DashboardService {
    pub fn new(state: &AppState) -> Self {
        Self {
            pool: state.diesel_pool.clone(),
        }
    }

    /// Compute the three counters for one owner. A count query returning no
    /// row should not happen under a consistent schema; it is treated as a
    /// fatal persistence failure rather than silently zeroed.
    #[instrument(skip(self))]
    pub async fn stats(&self, owner_id: &str) -> Result<DashboardStats, ServiceError> {
        use crate::schema::{job_application, saved_job};

        let mut conn = self.pool.get().await?;

        let interview_count = sql::<BigInt>("COUNT(*) FILTER (WHERE \"status\" = ")
            .bind::<Text, _>(ApplicationStatus::Interview.as_str())
            .sql(")");
        let application_counts = job_application::table
            .filter(job_application::user_id.eq(owner_id))
            .select((count_star(), interview_count))
            .first::<(i64, i64)>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| {
                ServiceError::Database("application count query returned no row".to_string())
            })?;

        let total_saved_jobs = saved_job::table
            .filter(saved_job::user_id.eq(owner_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| {
                ServiceError::Database("saved job count query returned no row".to_string())
            })?;

        let (total_applications, total_interviews) = application_counts;

        Ok(DashboardStats {
            total_applications,
            total_saved_jobs,
            total_interviews,
        })
    }
}
