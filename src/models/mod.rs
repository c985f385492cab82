pub mod enums;
pub mod job_application;
pub mod saved_job;
pub mod session;

// Re-export common types
pub use enums::{ApplicationStatus, InterviewType, JobType};
pub use job_application::{
    CreateJobApplicationRequest, JobApplication, JobApplicationChangeset, NewJobApplication,
    UpdateJobApplicationRequest,
};
pub use saved_job::{
    CreateSavedJobRequest, NewSavedJob, SavedJob, SavedJobChangeset, UpdateSavedJobRequest,
};
pub use session::SessionUser;
