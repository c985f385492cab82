// Request validation behavior exercised through the public API surface.

use jobtrack_backend_core::models::job_application::{
    CreateJobApplicationRequest, UpdateJobApplicationRequest,
};
use jobtrack_backend_core::models::saved_job::{CreateSavedJobRequest, UpdateSavedJobRequest};
use jobtrack_backend_core::ApplicationStatus;

#[test]
fn saved_job_rejects_malformed_link() {
    let request: CreateSavedJobRequest = serde_json::from_value(serde_json::json!({
        "position": "Engineer",
        "companyName": "Acme",
        "jobLink": "not-a-url",
        "location": "Remote",
        "jobType": "full-time"
    }))
    .expect("request should deserialize");

    let errors = request.validated().unwrap_err();
    assert!(errors.contains("jobLink"), "jobLink must be cited: {:?}", errors);
}

#[test]
fn saved_job_requires_job_type() {
    let request: CreateSavedJobRequest = serde_json::from_value(serde_json::json!({
        "position": "Engineer",
        "companyName": "Acme",
        "jobLink": "https://example.com/jobs/1",
        "location": "Remote"
    }))
    .expect("request should deserialize");

    let errors = request.validated().unwrap_err();
    assert!(errors.contains("jobType"));
}

#[test]
fn saved_job_rejects_out_of_set_job_type() {
    let result = serde_json::from_value::<CreateSavedJobRequest>(serde_json::json!({
        "position": "Engineer",
        "companyName": "Acme",
        "jobLink": "https://example.com/jobs/1",
        "location": "Remote",
        "jobType": "gig"
    }));
    assert!(result.is_err(), "unknown job type must not deserialize");
}

#[test]
fn application_reports_all_violations_in_one_pass() {
    let request: CreateJobApplicationRequest =
        serde_json::from_value(serde_json::json!({ "jobLink": "nope" }))
            .expect("request should deserialize");

    let errors = request.validated().unwrap_err();
    for field in ["companyName", "position", "jobLink", "status", "applicationDate"] {
        assert!(errors.contains(field), "missing violation for {}", field);
    }
}

#[test]
fn error_keys_match_the_submitted_field_names() {
    let request: CreateJobApplicationRequest =
        serde_json::from_value(serde_json::json!({ "jobLink": "nope" }))
            .expect("request should deserialize");

    let errors = request.validated().unwrap_err();
    let json = serde_json::to_value(&errors).expect("errors serialize");
    let keys: Vec<&str> = json
        .as_object()
        .expect("errors serialize to a map")
        .keys()
        .map(|k| k.as_str())
        .collect();

    // Every key is the camelCase name the caller submitted, never the
    // Rust-side identifier.
    assert_eq!(
        keys,
        ["applicationDate", "companyName", "jobLink", "position", "status"]
    );
}

#[test]
fn application_trims_before_validating() {
    let request: CreateJobApplicationRequest = serde_json::from_value(serde_json::json!({
        "companyName": "  Acme  ",
        "position": " Engineer ",
        "status": "applied",
        "applicationDate": "2024-03-01"
    }))
    .expect("request should deserialize");

    let valid = request.validated().expect("trimmed input is valid");
    assert_eq!(valid.company_name, "Acme");
    assert_eq!(valid.position, "Engineer");
    assert_eq!(valid.status, ApplicationStatus::Applied);
}

#[test]
fn application_update_distinguishes_absent_from_null() {
    let absent: UpdateJobApplicationRequest = serde_json::from_str("{}").unwrap();
    let cleared: UpdateJobApplicationRequest =
        serde_json::from_str(r#"{"followupDate": null, "interviewDate": null}"#).unwrap();

    let absent = absent.validated().unwrap();
    let cleared = cleared.validated().unwrap();

    assert_eq!(absent.followup_date, None);
    assert_eq!(cleared.followup_date, Some(None));
    assert_eq!(cleared.interview_date, Some(None));
}

#[test]
fn saved_job_update_accepts_partial_payload() {
    let request: UpdateSavedJobRequest =
        serde_json::from_value(serde_json::json!({ "salary": "120000" }))
            .expect("request should deserialize");

    let changeset = request.validated().unwrap();
    assert_eq!(changeset.salary.as_deref(), Some("120000"));
    assert_eq!(changeset.position, None);
    assert_eq!(changeset.job_type, None);
}
