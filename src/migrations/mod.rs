// Embedded migration runner. Migrations ship inside the binary so that a
// fresh database can be brought up without any external tooling.

pub mod diesel;

use crate::db::DieselPool;
use std::error::Error;
use tracing::{error, info};

/// Run all pending migrations against the primary database
pub async fn run_all_migrations(
    diesel_pool: &DieselPool,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("[MIGRATIONS] Running PostgreSQL migrations...");

    match diesel::run_migrations(diesel_pool).await {
        Ok(applied_count) => {
            if applied_count > 0 {
                info!("[MIGRATIONS] Applied {} migrations", applied_count);
            } else {
                info!("[MIGRATIONS] Migrations up to date");
            }
            Ok(())
        },
        Err(e) => {
            error!("[MIGRATIONS] Migration failed: {}", e);
            Err(format!("Migration failed: {}", e).into())
        },
    }
}

/// Whether embedded migrations should run at startup
pub fn should_run_migrations() -> bool {
    !crate::app_config::config().disable_embedded_migrations
}
