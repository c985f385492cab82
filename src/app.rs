// Shared application state threaded through the axum router.

use std::sync::Arc;

use crate::{app_config::AppConfig, db::DieselPool, services::SessionService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub diesel_pool: DieselPool,
    pub session_service: Arc<SessionService>,
    pub max_connections: u32,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, diesel_pool: DieselPool, max_connections: u32) -> Self {
        let session_service = Arc::new(SessionService::new(diesel_pool.clone()));
        Self {
            config,
            diesel_pool,
            session_service,
            max_connections,
        }
    }
}
