// Service layer: ownership-scoped operations over the database pool

pub mod dashboard;
pub mod job_application;
pub mod saved_job;
pub mod session;

pub use dashboard::{DashboardService, DashboardStats};
pub use job_application::JobApplicationService;
pub use saved_job::SavedJobService;
pub use session::SessionService;
