use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PlacementError, PlacementResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    OnCampus,
    OffCampus,
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveStatus {
    Draft,
    PendingReview,
    Published,
    Closed,
}

/// Operations that move a drive through its review lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveAction {
    /// Recruiter sends a draft to the placement cell
    Submit,
    /// Placement cell approves and publishes
    Approve,
    /// Placement cell sends the drive back with comments
    RequestChanges,
    Close,
}

impl DriveStatus {
    /// Returns the status reached by applying `action`, or a validation error
    /// if the action is not allowed from the current status.
    pub fn apply(self, action: DriveAction) -> PlacementResult<DriveStatus> {
        use DriveAction::*;
        use DriveStatus::*;

        match (self, action) {
            (Draft, Submit) => Ok(PendingReview),
            (PendingReview, Approve) => Ok(Published),
            (PendingReview, RequestChanges) => Ok(Draft),
            (Published, Close) => Ok(Closed),
            (status, action) => Err(PlacementError::Validation(format!(
                "Cannot {:?} a drive in status {:?}",
                action, status
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub min_cgpa: f32,
    /// Empty means every branch may apply
    #[serde(default)]
    pub allowed_branches: Vec<String>,
    /// Empty means every graduation year may apply
    #[serde(default)]
    pub allowed_years: Vec<u16>,
    pub max_backlogs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    /// Annual compensation in rupees
    pub ctc: u64,
    pub mode: DriveMode,
    pub location: Option<String>,
    pub description: String,
    pub process: Vec<String>,
    pub eligibility: EligibilityCriteria,
    pub deadline: DateTime<Utc>,
    pub status: DriveStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub review_comments: Option<String>,
}

impl Drive {
    pub fn is_open_for_registration(&self, now: DateTime<Utc>) -> bool {
        self.status == DriveStatus::Published && now <= self.deadline
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDriveRequest {
    pub company_name: String,
    pub role: String,
    pub ctc: u64,
    pub mode: DriveMode,
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub process: Vec<String>,
    pub eligibility: EligibilityCriteria,
    pub deadline: DateTime<Utc>,
    pub created_by: String,
    /// Send straight to review instead of saving a draft
    #[serde(default)]
    pub submit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveActionRequest {
    pub action: DriveAction,
    pub comments: Option<String>,
}
