// Ownership-scoped persistence operations for job applications.
//
// Every mutation and read is constrained by the compound (id, user_id)
// predicate; the owner id always comes from the authenticated session. A
// zero-row update or delete surfaces as NotFoundOrForbidden without saying
// whether the id was missing or owned by someone else.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, instrument};

use crate::{
    app::AppState,
    db::DieselPool,
    models::job_application::{
        CreateJobApplicationRequest, JobApplication, UpdateJobApplicationRequest,
    },
    utils::service_error::ServiceError,
};

pub struct JobApplicationService {
    pool: DieselPool,
}

impl JobApplicationService {
    pub fn new(state: &AppState) -> Self {
        Self {
            pool: state.diesel_pool.clone(),
        }
    }

    /// Validate and insert a new application for the caller. Returns the
    /// generated row id; an insert that yields no id is a backend fault.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        owner_id: &str,
        request: CreateJobApplicationRequest,
    ) -> Result<i32, ServiceError> {
        use crate::schema::job_application::dsl;

        let valid = request.validated().map_err(|errors| {
            let values = serde_json::to_value(&request).unwrap_or_default();
            ServiceError::validation(errors, values)
        })?;

        let mut conn = self.pool.get().await?;

        let id = diesel::insert_into(dsl::job_application)
            .values(valid.into_row(owner_id))
            .returning(dsl::id)
            .get_result::<i32>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| {
                ServiceError::Database("insert returned no generated id".to_string())
            })?;

        debug!("created job application {} for owner {}", id, owner_id);
        Ok(id)
    }

    /// Partial update scoped to the owner. Only supplied fields change;
    /// updatedAt is always refreshed server-side.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        owner_id: &str,
        id: i32,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplication, ServiceError> {
        use crate::schema::job_application::dsl;

        let changeset = request.validated().map_err(|errors| {
            let values = serde_json::to_value(&request).unwrap_or_default();
            ServiceError::validation(errors, values)
        })?;

        let mut conn = self.pool.get().await?;

        let updated = diesel::update(
            dsl::job_application
                .filter(dsl::id.eq(id))
                .filter(dsl::user_id.eq(owner_id)),
        )
        .set((&changeset, dsl::updated_at.eq(diesel::dsl::now)))
        .get_result::<JobApplication>(&mut conn)
        .await
        .optional()?;

        match updated {
            Some(row) => Ok(row),
            None => {
                debug!(
                    "update matched zero rows for job_application id={} owner={}",
                    id, owner_id
                );
                Err(ServiceError::NotFoundOrForbidden)
            },
        }
    }

    /// Delete scoped to the owner, with the same zero-row semantics as update
    #[instrument(skip(self))]
    pub async fn remove(&self, owner_id: &str, id: i32) -> Result<(), ServiceError> {
        use crate::schema::job_application::dsl;

        let mut conn = self.pool.get().await?;

        let rows = diesel::delete(
            dsl::job_application
                .filter(dsl::id.eq(id))
                .filter(dsl::user_id.eq(owner_id)),
        )
        .execute(&mut conn)
        .await?;

        if rows == 0 {
            debug!(
                "delete matched zero rows for job_application id={} owner={}",
                id, owner_id
            );
            return Err(ServiceError::NotFoundOrForbidden);
        }

        Ok(())
    }

    /// All of the caller's applications, most recently touched first.
    /// No pagination: this is a personal tool, the full set is small.
    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<JobApplication>, ServiceError> {
        use crate::schema::job_application::dsl;

        let mut conn = self.pool.get().await?;

        let rows = dsl::job_application
            .filter(dsl::user_id.eq(owner_id))
            .order(dsl::updated_at.desc())
            .select(JobApplication::as_select())
            .load::<JobApplication>(&mut conn)
            .await?;

        Ok(rows)
    }
}
