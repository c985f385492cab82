// Job application entity: database rows, request DTOs and their validation.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::enums::{ApplicationStatus, InterviewType};
use crate::schema::job_application;
use crate::utils::service_error::FieldErrors;
use crate::utils::validation::{double_option, trim_optional_field};

// =============================================================================
// DATABASE MODELS
// =============================================================================

/// One tracked application, as stored
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = job_application)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i32,
    pub user_id: String,
    pub company_name: String,
    pub position: String,
    pub job_link: String,
    pub status: String,
    pub application_date: NaiveDate,
    pub followup_date: Option<NaiveDate>,
    pub interview_date: Option<NaiveDate>,
    pub interview_type: String,
    pub notes: String,
    pub salary: String,
    pub location: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New row for insertion. Timestamps are server-assigned via the column
/// defaults, the generated id comes back through RETURNING.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = job_application)]
pub struct NewJobApplication {
    pub user_id: String,
    pub company_name: String,
    pub position: String,
    pub job_link: String,
    pub status: String,
    pub application_date: NaiveDate,
    pub followup_date: Option<NaiveDate>,
    pub interview_date: Option<NaiveDate>,
    pub interview_type: String,
    pub notes: String,
    pub salary: String,
    pub location: String,
}

/// Partial update: None leaves a column untouched, the nullable date columns
/// use a second Option so an explicit null clears them.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = job_application)]
pub struct JobApplicationChangeset {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub job_link: Option<String>,
    pub status: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub followup_date: Option<Option<NaiveDate>>,
    pub interview_date: Option<Option<NaiveDate>>,
    pub interview_type: Option<String>,
    pub notes: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
}

// =============================================================================
// REQUEST DTOs
// =============================================================================

/// Request to record a new application
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplicationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,

    #[validate(url(message = "Invalid URL format"))]
    pub job_link: Option<String>,

    pub status: Option<ApplicationStatus>,

    pub application_date: Option<NaiveDate>,

    pub notes: Option<String>,

    pub salary: Option<String>,

    pub location: Option<String>,
}

/// Normalized fields of a create request that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJobApplication {
    pub company_name: String,
    pub position: String,
    pub job_link: String,
    pub status: ApplicationStatus,
    pub application_date: NaiveDate,
    pub notes: String,
    pub salary: String,
    pub location: String,
}

impl ValidatedJobApplication {
    /// Attach the session-derived owner. The raw input never carries an
    /// owner id; it always comes from the authenticated caller.
    pub fn into_row(self, owner_id: &str) -> NewJobApplication {
        NewJobApplication {
            user_id: owner_id.to_string(),
            company_name: self.company_name,
            position: self.position,
            job_link: self.job_link,
            status: self.status.as_str().to_string(),
            application_date: self.application_date,
            followup_date: None,
            interview_date: None,
            interview_type: String::new(),
            notes: self.notes,
            salary: self.salary,
            location: self.location,
        }
    }
}

impl CreateJobApplicationRequest {
    /// Trim string fields; empty optional submissions collapse to None the
    /// same way the form layer strips them.
    pub fn sanitize(&mut self) {
        self.company_name = self.company_name.trim().to_string();
        self.position = self.position.trim().to_string();
        self.job_link = trim_optional_field(self.job_link.as_ref());
        self.notes = self.notes.as_ref().map(|s| s.trim().to_string());
        self.salary = trim_optional_field(self.salary.as_ref());
        self.location = trim_optional_field(self.location.as_ref());
    }

    /// Check every declared rule and either hand back the normalized field
    /// set or all violations at once.
    pub fn validated(&self) -> Result<ValidatedJobApplication, FieldErrors> {
        let mut input = self.clone();
        input.sanitize();

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.extend_from_validator(&e);
        }
        if input.status.is_none() {
            errors.push("status", "Status is required");
        }
        if input.application_date.is_none() {
            errors.push("applicationDate", "Application date is required.");
        }

        match (input.status, input.application_date) {
            (Some(status), Some(application_date)) if errors.is_empty() => {
                Ok(ValidatedJobApplication {
                    company_name: input.company_name,
                    position: input.position,
                    job_link: input.job_link.unwrap_or_default(),
                    status,
                    application_date,
                    notes: input.notes.unwrap_or_default(),
                    salary: input.salary.unwrap_or_default(),
                    location: input.location.unwrap_or_default(),
                })
            },
            _ => Err(errors),
        }
    }
}

/// Request to update an existing application. Absent fields mean "no
/// change"; followupDate/interviewDate accept an explicit null to clear.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobApplicationRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, message = "Position is required"))]
    pub position: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub job_link: Option<String>,

    pub status: Option<ApplicationStatus>,

    pub application_date: Option<NaiveDate>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub followup_date: Option<Option<NaiveDate>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub interview_date: Option<Option<NaiveDate>>,

    pub interview_type: Option<InterviewType>,

    pub notes: Option<String>,

    pub salary: Option<String>,

    pub location: Option<String>,
}

impl UpdateJobApplicationRequest {
    pub fn sanitize(&mut self) {
        self.company_name = self.company_name.as_ref().map(|s| s.trim().to_string());
        self.position = self.position.as_ref().map(|s| s.trim().to_string());
        // An empty link or salary is the form's way of leaving the field
        // alone, not a request to store an empty value.
        self.job_link = trim_optional_field(self.job_link.as_ref());
        self.salary = trim_optional_field(self.salary.as_ref());
        self.notes = self.notes.as_ref().map(|s| s.trim().to_string());
        self.location = self.location.as_ref().map(|s| s.trim().to_string());
    }

    pub fn validated(&self) -> Result<JobApplicationChangeset, FieldErrors> {
        let mut input = self.clone();
        input.sanitize();

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.extend_from_validator(&e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(JobApplicationChangeset {
            company_name: input.company_name,
            position: input.position,
            job_link: input.job_link,
            status: input.status.map(|s| s.as_str().to_string()),
            application_date: input.application_date,
            followup_date: input.followup_date,
            interview_date: input.interview_date,
            interview_type: input.interview_type.map(|t| t.as_str().to_string()),
            notes: input.notes,
            salary: input.salary,
            location: input.location,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateJobApplicationRequest {
        CreateJobApplicationRequest {
            company_name: "Acme".to_string(),
            position: "Engineer".to_string(),
            job_link: None,
            status: Some(ApplicationStatus::Applied),
            application_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            notes: None,
            salary: None,
            location: None,
        }
    }

    #[test]
    fn create_accepts_minimal_valid_input() {
        let valid = valid_create().validated().expect("should validate");
        assert_eq!(valid.company_name, "Acme");
        assert_eq!(valid.status, ApplicationStatus::Applied);
        // Optional strings normalize to the column defaults
        assert_eq!(valid.job_link, "");
        assert_eq!(valid.notes, "");
    }

    #[test]
    fn create_reports_every_violation_at_once() {
        let request = CreateJobApplicationRequest {
            company_name: "  ".to_string(),
            position: String::new(),
            job_link: Some("not-a-url".to_string()),
            status: None,
            application_date: None,
            notes: None,
            salary: None,
            location: None,
        };
        let errors = request.validated().unwrap_err();
        assert!(errors.contains("companyName"));
        assert!(errors.contains("position"));
        assert!(errors.contains("jobLink"));
        assert!(errors.contains("status"));
        assert!(errors.contains("applicationDate"));
    }

    #[test]
    fn create_owner_always_comes_from_caller() {
        let row = valid_create().validated().unwrap().into_row("user-1");
        assert_eq!(row.user_id, "user-1");
        assert_eq!(row.status, "applied");
        assert_eq!(row.followup_date, None);
        assert_eq!(row.interview_type, "");
    }

    #[test]
    fn create_collapses_empty_optional_link() {
        let mut request = valid_create();
        request.job_link = Some("   ".to_string());
        let valid = request.validated().expect("empty link is not an error");
        assert_eq!(valid.job_link, "");
    }

    #[test]
    fn update_absent_fields_leave_columns_untouched() {
        let request: UpdateJobApplicationRequest = serde_json::from_str("{}").unwrap();
        let changeset = request.validated().unwrap();
        assert_eq!(changeset.company_name, None);
        assert_eq!(changeset.status, None);
        assert_eq!(changeset.followup_date, None);
    }

    #[test]
    fn update_null_clears_followup_date() {
        let request: UpdateJobApplicationRequest =
            serde_json::from_str(r#"{"followupDate": null}"#).unwrap();
        let changeset = request.validated().unwrap();
        assert_eq!(changeset.followup_date, Some(None));
    }

    #[test]
    fn update_rejects_empty_company_name() {
        let request: UpdateJobApplicationRequest =
            serde_json::from_str(r#"{"companyName": ""}"#).unwrap();
        let errors = request.validated().unwrap_err();
        assert!(errors.contains("companyName"));
    }

    #[test]
    fn update_maps_enum_fields_to_wire_strings() {
        let request: UpdateJobApplicationRequest = serde_json::from_str(
            r#"{"status": "interview", "interviewType": "video-call", "interviewDate": "2024-02-10"}"#,
        )
        .unwrap();
        let changeset = request.validated().unwrap();
        assert_eq!(changeset.status.as_deref(), Some("interview"));
        assert_eq!(changeset.interview_type.as_deref(), Some("video-call"));
        assert_eq!(
            changeset.interview_date,
            Some(Some(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()))
        );
    }

    #[test]
    fn update_rejects_unknown_status() {
        let result = serde_json::from_str::<UpdateJobApplicationRequest>(r#"{"status": "ghosted"}"#);
        assert!(result.is_err());
    }
}
