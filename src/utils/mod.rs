// Utility modules for the job tracker backend

pub mod service_error;
pub mod validation;

pub use service_error::{FieldErrors, ServiceError};
pub use validation::{double_option, trim_optional_field};
