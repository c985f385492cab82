// Session lookup against the auth collaborator's tables.
//
// The auth service (which issues sessions) stores them in the same Postgres
// database, so resolving a caller is a read-only join of `session` to
// `user`. Expired sessions are treated exactly like absent ones.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::instrument;

use crate::{db::DieselPool, models::session::SessionUser, utils::service_error::ServiceError};

pub struct SessionService {
    pool: DieselPool,
}

impl SessionService {
    pub fn new(pool: DieselPool) -> Self {
        Self { pool }
    }

    /// Resolve a session token to its user, or None when the token is
    /// unknown or expired.
    #[instrument(skip(self, token))]
    pub async fn resolve_token(&self, token: &str) -> Result<Option<SessionUser>, ServiceError> {
        use crate::schema::{session, user};

        let mut conn = self.pool.get().await?;

        let row = session::table
            .inner_join(user::table.on(user::id.eq(session::user_id)))
            .filter(session::token.eq(token))
            .filter(session::expires_at.gt(diesel::dsl::now))
            .select((user::id, user::name))
            .first::<(String, String)>(&mut conn)
            .await
            .optional()?;

        Ok(row.map(|(id, name)| SessionUser { id, name }))
    }
}
