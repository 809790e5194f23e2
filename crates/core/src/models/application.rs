use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::eligibility::EligibilityVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Registered,
    Shortlisted,
    Offered,
    Rejected,
    Accepted,
    Declined,
    Withdrawn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub drive_id: Uuid,
    pub student_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub next_step: Option<String>,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub student_id: String,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub drive_id: Uuid,
    pub student_id: String,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl NewApplication {
    pub fn from_request(drive_id: Uuid, request: RegisterRequest) -> Self {
        Self {
            drive_id,
            student_id: request.student_id,
            resume_url: request.resume_url,
            linkedin_url: request.linkedin_url,
            portfolio_url: request.portfolio_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferDecision {
    Accept,
    Decline,
}

impl From<OfferDecision> for OfferStatus {
    fn from(decision: OfferDecision) -> Self {
        match decision {
            OfferDecision::Accept => OfferStatus::Accepted,
            OfferDecision::Decline => OfferStatus::Declined,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub drive_id: Uuid,
    pub student_id: String,
    pub company_name: String,
    pub role: String,
    pub ctc: u64,
    pub joining_date: NaiveDate,
    pub offer_letter_url: Option<String>,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondOfferRequest {
    pub decision: OfferDecision,
}

/// Registration outcome returned to the student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub application: Application,
    pub eligibility: EligibilityVerdict,
}
