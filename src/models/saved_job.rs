// Saved job entity: bookmarked listings not yet applied to.
// Stricter than job applications: the link and location are mandatory.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::enums::JobType;
use crate::schema::saved_job;
use crate::utils::service_error::FieldErrors;
use crate::utils::validation::trim_optional_field;

// =============================================================================
// DATABASE MODELS
// =============================================================================

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = saved_job)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    pub id: i32,
    pub user_id: String,
    pub position: String,
    pub company_name: String,
    pub job_link: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = saved_job)]
pub struct NewSavedJob {
    pub user_id: String,
    pub position: String,
    pub company_name: String,
    pub job_link: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
}

/// Partial update changeset; None skips the column
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = saved_job)]
pub struct SavedJobChangeset {
    pub position: Option<String>,
    pub company_name: Option<String>,
    pub job_link: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
}

// =============================================================================
// REQUEST DTOs
// =============================================================================

/// Request to bookmark a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedJobRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Job link is required"),
        url(message = "Invalid URL format")
    )]
    pub job_link: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    pub job_type: Option<JobType>,

    pub salary: Option<String>,
}

/// Normalized fields of a create request that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedSavedJob {
    pub company_name: String,
    pub position: String,
    pub job_link: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: String,
}

impl ValidatedSavedJob {
    pub fn into_row(self, owner_id: &str) -> NewSavedJob {
        NewSavedJob {
            user_id: owner_id.to_string(),
            position: self.position,
            company_name: self.company_name,
            job_link: self.job_link,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type.as_str().to_string(),
        }
    }
}

impl CreateSavedJobRequest {
    pub fn sanitize(&mut self) {
        self.company_name = self.company_name.trim().to_string();
        self.position = self.position.trim().to_string();
        self.job_link = self.job_link.trim().to_string();
        self.location = self.location.trim().to_string();
        self.salary = trim_optional_field(self.salary.as_ref());
    }

    pub fn validated(&self) -> Result<ValidatedSavedJob, FieldErrors> {
        let mut input = self.clone();
        input.sanitize();

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.extend_from_validator(&e);
        }
        if input.job_type.is_none() {
            errors.push("jobType", "Job type is required");
        }

        match input.job_type {
            Some(job_type) if errors.is_empty() => Ok(ValidatedSavedJob {
                company_name: input.company_name,
                position: input.position,
                job_link: input.job_link,
                location: input.location,
                job_type,
                salary: input.salary.unwrap_or_default(),
            }),
            _ => Err(errors),
        }
    }
}

/// Request to update a saved job; every field optional, absent means
/// "no change".
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSavedJobRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, message = "Position is required"))]
    pub position: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub job_link: Option<String>,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: Option<String>,

    pub job_type: Option<JobType>,

    pub salary: Option<String>,
}

impl UpdateSavedJobRequest {
    pub fn sanitize(&mut self) {
        self.company_name = self.company_name.as_ref().map(|s| s.trim().to_string());
        self.position = self.position.as_ref().map(|s| s.trim().to_string());
        self.job_link = trim_optional_field(self.job_link.as_ref());
        self.location = self.location.as_ref().map(|s| s.trim().to_string());
        self.salary = trim_optional_field(self.salary.as_ref());
    }

    pub fn validated(&self) -> Result<SavedJobChangeset, FieldErrors> {
        let mut input = self.clone();
        input.sanitize();

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.extend_from_validator(&e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SavedJobChangeset {
            position: input.position,
            company_name: input.company_name,
            job_link: input.job_link,
            location: input.location,
            salary: input.salary,
            job_type: input.job_type.map(|t| t.as_str().to_string()),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateSavedJobRequest {
        CreateSavedJobRequest {
            company_name: "Acme".to_string(),
            position: "Engineer".to_string(),
            job_link: "https://jobs.acme.example/123".to_string(),
            location: "Remote".to_string(),
            job_type: Some(JobType::FullTime),
            salary: None,
        }
    }

    #[test]
    fn create_accepts_valid_input() {
        let valid = valid_create().validated().expect("should validate");
        assert_eq!(valid.job_type, JobType::FullTime);
        assert_eq!(valid.salary, "");
    }

    #[test]
    fn create_rejects_malformed_url() {
        let mut request = valid_create();
        request.job_link = "not-a-url".to_string();
        let errors = request.validated().unwrap_err();
        assert!(errors.contains("jobLink"));
        assert!(!errors.contains("companyName"));
    }

    #[test]
    fn create_requires_link_location_and_type() {
        let request = CreateSavedJobRequest {
            company_name: "Acme".to_string(),
            position: "Engineer".to_string(),
            job_link: String::new(),
            location: String::new(),
            job_type: None,
            salary: None,
        };
        let errors = request.validated().unwrap_err();
        assert!(errors.contains("jobLink"));
        assert!(errors.contains("location"));
        assert!(errors.contains("jobType"));
    }

    #[test]
    fn update_partial_change_only_touches_supplied_fields() {
        let request: UpdateSavedJobRequest =
            serde_json::from_str(r#"{"jobType": "contract"}"#).unwrap();
        let changeset = request.validated().unwrap();
        assert_eq!(changeset.job_type.as_deref(), Some("contract"));
        assert_eq!(changeset.company_name, None);
        assert_eq!(changeset.job_link, None);
    }

    #[test]
    fn update_rejects_unknown_job_type() {
        assert!(serde_json::from_str::<UpdateSavedJobRequest>(r#"{"jobType": "gig"}"#).is_err());
    }
}
