// Closed string-enum fields shared by both entities.
// The wire strings are fixed; anything outside these sets is rejected at the
// validation boundary rather than stored as free text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Lifecycle status of a tracked application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApplicationStatus {
    #[serde(rename = "applied")]
    Applied,
    #[serde(rename = "interview")]
    Interview,
    #[serde(rename = "offer")]
    Offer,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "applicantRejected")]
    ApplicantRejected,
    #[serde(rename = "no response")]
    NoResponse,
    #[serde(rename = "withdrawn")]
    Withdrawn,
    #[serde(rename = "initial interview")]
    InitialInterview,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::ApplicantRejected => "applicantRejected",
            ApplicationStatus::NoResponse => "no response",
            ApplicationStatus::Withdrawn => "withdrawn",
            ApplicationStatus::InitialInterview => "initial interview",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(ApplicationStatus::Applied),
            "interview" => Ok(ApplicationStatus::Interview),
            "offer" => Ok(ApplicationStatus::Offer),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "applicantRejected" => Ok(ApplicationStatus::ApplicantRejected),
            "no response" => Ok(ApplicationStatus::NoResponse),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            "initial interview" => Ok(ApplicationStatus::InitialInterview),
            other => Err(format!("unknown application status: {}", other)),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment type of a saved listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JobType {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "internship")]
    Internship,
    #[serde(rename = "freelance")]
    Freelance,
    #[serde(rename = "temporary")]
    Temporary,
    #[serde(rename = "other")]
    Other,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Freelance => "freelance",
            JobType::Temporary => "temporary",
            JobType::Other => "other",
        }
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            "freelance" => Ok(JobType::Freelance),
            "temporary" => Ok(JobType::Temporary),
            "other" => Ok(JobType::Other),
            other => Err(format!("unknown job type: {}", other)),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an interview is conducted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InterviewType {
    #[serde(rename = "video-call")]
    VideoCall,
    #[serde(rename = "phone-call")]
    PhoneCall,
    #[serde(rename = "face-to-face")]
    FaceToFace,
    #[serde(rename = "others")]
    Others,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::VideoCall => "video-call",
            InterviewType::PhoneCall => "phone-call",
            InterviewType::FaceToFace => "face-to-face",
            InterviewType::Others => "others",
        }
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video-call" => Ok(InterviewType::VideoCall),
            "phone-call" => Ok(InterviewType::PhoneCall),
            "face-to-face" => Ok(InterviewType::FaceToFace),
            "others" => Ok(InterviewType::Others),
            other => Err(format!("unknown interview type: {}", other)),
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_strings() {
        let all = [
            ApplicationStatus::Applied,
            ApplicationStatus::Interview,
            ApplicationStatus::Offer,
            ApplicationStatus::Rejected,
            ApplicationStatus::Accepted,
            ApplicationStatus::ApplicantRejected,
            ApplicationStatus::NoResponse,
            ApplicationStatus::Withdrawn,
            ApplicationStatus::InitialInterview,
        ];
        for status in all {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_strings_outside_the_set() {
        assert!("ghosted".parse::<ApplicationStatus>().is_err());
        assert!("Applied".parse::<ApplicationStatus>().is_err());
        assert!("".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_wire_spellings() {
        let json = serde_json::to_string(&ApplicationStatus::ApplicantRejected).unwrap();
        assert_eq!(json, "\"applicantRejected\"");
        let parsed: ApplicationStatus = serde_json::from_str("\"no response\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::NoResponse);
        assert!(serde_json::from_str::<ApplicationStatus>("\"maybe\"").is_err());
    }

    #[test]
    fn job_type_rejects_strings_outside_the_set() {
        assert!("full-time".parse::<JobType>().is_ok());
        assert!("fulltime".parse::<JobType>().is_err());
        assert!(serde_json::from_str::<JobType>("\"gig\"").is_err());
    }

    #[test]
    fn interview_type_round_trips() {
        for raw in ["video-call", "phone-call", "face-to-face", "others"] {
            let parsed: InterviewType = raw.parse().unwrap();
            assert_eq!(parsed.as_str(), raw);
        }
        assert!("in-person".parse::<InterviewType>().is_err());
    }
}
