// Error taxonomy for the job tracker core.
//
// Validation failures carry every violated field plus the submitted values so
// the caller can re-display the form. Zero-row updates and deletes are
// reported as a single NotFoundOrForbidden: whether the id does not exist or
// belongs to another user is deliberately indistinguishable to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation messages, keyed by the wire-format field name
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Fold validator-derived errors into the map, keeping every message.
    /// Validator reports fields under their Rust identifiers; the map keys
    /// must match the camelCase names the caller submitted.
    pub fn extend_from_validator(&mut self, errors: &validator::ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                self.push(&wire_field_name(field), message);
            }
        }
    }
}

/// snake_case Rust field identifier to its camelCase wire name
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        out.extend_from_validator(&errors);
        out
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    /// One or more input fields failed their declared rules. The submitted
    /// values are echoed back for re-display; never logged as a fault.
    #[error("validation failed")]
    Validation {
        errors: FieldErrors,
        values: serde_json::Value,
    },

    /// No valid session; refused before touching persistence.
    #[error("unauthenticated")]
    Unauthenticated(&'static str),

    /// The compound id+owner predicate matched zero rows.
    #[error("not found")]
    NotFoundOrForbidden,

    /// Backend call failed or returned an unexpected shape. Surfaced as a
    /// generic message, never retried.
    #[error("database error: {0}")]
    Database(String),
}

impl ServiceError {
    pub fn validation(errors: FieldErrors, values: serde_json::Value) -> Self {
        ServiceError::Validation { errors, values }
    }

    /// Response with an operation-specific persistence failure message,
    /// matching the per-action wording the frontend displays.
    pub fn into_op_response(self, operation: &'static str) -> Response {
        match self {
            ServiceError::Database(detail) => {
                tracing::error!("failed to {}: {}", operation, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": format!("Failed to {}. Please try again later.", operation)
                    })),
                )
                    .into_response()
            },
            other => other.into_response(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation { errors, values } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "errors": errors,
                    "values": values,
                })),
            )
                .into_response(),
            ServiceError::Unauthenticated(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ServiceError::NotFoundOrForbidden => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found" })),
            )
                .into_response(),
            ServiceError::Database(detail) => {
                tracing::error!("persistence failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Something went wrong. Please try again later." })),
                )
                    .into_response()
            },
        }
    }
}

impl From<diesel::result::Error> for ServiceError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => ServiceError::NotFoundOrForbidden,
            _ => ServiceError::Database(error.to_string()),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for ServiceError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        ServiceError::Database(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_collects_every_message() {
        let mut errors = FieldErrors::new();
        errors.push("companyName", "Company name is required");
        errors.push("jobLink", "Invalid URL format");
        errors.push("jobLink", "Job link is required");

        assert!(!errors.is_empty());
        assert!(errors.contains("companyName"));
        assert!(errors.contains("jobLink"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["jobLink"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn validator_errors_are_keyed_by_wire_names() {
        use validator::Validate;

        #[derive(Validate)]
        struct Form {
            #[validate(length(min = 1, message = "Company name is required"))]
            company_name: String,
            #[validate(url(message = "Invalid URL format"))]
            job_link: String,
        }

        let form = Form {
            company_name: String::new(),
            job_link: "not-a-url".to_string(),
        };
        let mut errors = FieldErrors::new();
        errors.extend_from_validator(&form.validate().unwrap_err());

        assert!(errors.contains("companyName"));
        assert!(errors.contains("jobLink"));
        assert!(!errors.contains("company_name"));
        assert!(!errors.contains("job_link"));
    }

    #[test]
    fn wire_field_name_converts_snake_case() {
        assert_eq!(wire_field_name("application_date"), "applicationDate");
        assert_eq!(wire_field_name("status"), "status");
        assert_eq!(wire_field_name("job_link"), "jobLink");
    }

    #[test]
    fn diesel_not_found_maps_to_not_found_or_forbidden() {
        let err: ServiceError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, ServiceError::NotFoundOrForbidden));
    }
}
