// Ownership-scoped persistence operations for saved jobs.
// Same compound-predicate rules as job applications; listings are ordered by
// creation time since bookmarks are rarely edited after the fact.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, instrument};

use crate::{
    app::AppState,
    db::DieselPool,
    models::saved_job::{CreateSavedJobRequest, SavedJob, UpdateSavedJobRequest},
    utils::service_error::ServiceError,
};

pub struct SavedJobService {
    pool: DieselPool,
}

impl SavedJobService {
    pub fn new(state: &AppState) -> Self {
        Self {
            pool: state.diesel_pool.clone(),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        owner_id: &str,
        request: CreateSavedJobRequest,
    ) -> Result<i32, ServiceError> {
        use crate::schema::saved_job::dsl;

        let valid = request.validated().map_err(|errors| {
            let values = serde_json::to_value(&request).unwrap_or_default();
            ServiceError::validation(errors, values)
        })?;

        let mut conn = self.pool.get().await?;

        let id = diesel::insert_into(dsl::saved_job)
            .values(valid.into_row(owner_id))
            .returning(dsl::id)
            .get_result::<i32>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| {
                ServiceError::Database("insert returned no generated id".to_string())
            })?;

        debug!("created saved job {} for owner {}", id, owner_id);
        Ok(id)
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        owner_id: &str,
        id: i32,
        request: UpdateSavedJobRequest,
    ) -> Result<SavedJob, ServiceError> {
        use crate::schema::saved_job::dsl;

        let changeset = request.validated().map_err(|errors| {
            let values = serde_json::to_value(&request).unwrap_or_default();
            ServiceError::validation(errors, values)
        })?;

        let mut conn = self.pool.get().await?;

        let updated = diesel::update(
            dsl::saved_job
                .filter(dsl::id.eq(id))
                .filter(dsl::user_id.eq(owner_id)),
        )
        .set((&changeset, dsl::updated_at.eq(diesel::dsl::now)))
        .get_result::<SavedJob>(&mut conn)
        .await
        .optional()?;

        match updated {
            Some(row) => Ok(row),
            None => {
                debug!(
                    "update matched zero rows for saved_job id={} owner={}",
                    id, owner_id
                );
                Err(ServiceError::NotFoundOrForbidden)
            },
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, owner_id: &str, id: i32) -> Result<(), ServiceError> {
        use crate::schema::saved_job::dsl;

        let mut conn = self.pool.get().await?;

        let rows = diesel::delete(
            dsl::saved_job
                .filter(dsl::id.eq(id))
                .filter(dsl::user_id.eq(owner_id)),
        )
        .execute(&mut conn)
        .await?;

        if rows == 0 {
            debug!(
                "delete matched zero rows for saved_job id={} owner={}",
                id, owner_id
            );
            return Err(ServiceError::NotFoundOrForbidden);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SavedJob>, ServiceError> {
        use crate::schema::saved_job::dsl;

        let mut conn = self.pool.get().await?;

        let rows = dsl::saved_job
            .filter(dsl::user_id.eq(owner_id))
            .order(dsl::created_at.desc())
            .select(SavedJob::as_select())
            .load::<SavedJob>(&mut conn)
            .await?;

        Ok(rows)
    }
}
