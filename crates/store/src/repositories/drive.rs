use async_trait::async_trait;
use chrono::Utc;
use mockall::automock;
use placement_core::{
    errors::{PlacementError, PlacementResult},
    models::drive::{CreateDriveRequest, Drive, DriveAction, DriveStatus},
};
use tracing::info;
use uuid::Uuid;

use crate::InMemoryStore;

#[automock]
#[async_trait]
pub trait DriveRepository: Send + Sync {
    /// Drives ordered by creation time, optionally restricted to one status.
    async fn list_drives(&self, status: Option<DriveStatus>) -> PlacementResult<Vec<Drive>>;

    async fn get_drive(&self, id: Uuid) -> PlacementResult<Option<Drive>>;

    async fn create_drive(&self, request: CreateDriveRequest) -> PlacementResult<Drive>;

    /// Moves a drive through its review lifecycle. Review comments replace any
    /// previous ones when given.
    async fn apply_action(
        &self,
        id: Uuid,
        action: DriveAction,
        comments: Option<String>,
    ) -> PlacementResult<Drive>;
}

#[async_trait]
impl DriveRepository for InMemoryStore {
    async fn list_drives(&self, status: Option<DriveStatus>) -> PlacementResult<Vec<Drive>> {
        let drives = self.drives.read().await;
        let mut listed: Vec<Drive> = drives
            .values()
            .filter(|d| status.is_none_or(|s| d.status == s))
            .cloned()
            .collect();
        listed.sort_by_key(|d| d.created_at);
        Ok(listed)
    }

    async fn get_drive(&self, id: Uuid) -> PlacementResult<Option<Drive>> {
        Ok(self.drives.read().await.get(&id).cloned())
    }

    async fn create_drive(&self, request: CreateDriveRequest) -> PlacementResult<Drive> {
        if request.company_name.trim().is_empty() || request.role.trim().is_empty() {
            return Err(PlacementError::Validation(
                "Company name and role are required".to_string(),
            ));
        }

        let status = if request.submit {
            DriveStatus::PendingReview
        } else {
            DriveStatus::Draft
        };

        let drive = Drive {
            id: Uuid::new_v4(),
            company_name: request.company_name,
            role: request.role,
            ctc: request.ctc,
            mode: request.mode,
            location: request.location,
            description: request.description,
            process: request.process,
            eligibility: request.eligibility,
            deadline: request.deadline,
            status,
            created_by: request.created_by,
            created_at: Utc::now(),
            review_comments: None,
        };

        self.drives.write().await.insert(drive.id, drive.clone());
        info!(drive_id = %drive.id, status = ?drive.status, "Created drive");

        Ok(drive)
    }

    async fn apply_action(
        &self,
        id: Uuid,
        action: DriveAction,
        comments: Option<String>,
    ) -> PlacementResult<Drive> {
        let comments = comments.filter(|c| !c.trim().is_empty());
        if action == DriveAction::RequestChanges && comments.is_none() {
            return Err(PlacementError::Validation(
                "Comments are required when requesting changes".to_string(),
            ));
        }

        let mut drives = self.drives.write().await;
        let drive = drives
            .get_mut(&id)
            .ok_or_else(|| PlacementError::NotFound(format!("Drive with ID {} not found", id)))?;

        drive.status = drive.status.apply(action)?;
        if comments.is_some() {
            drive.review_comments = comments;
        }
        info!(drive_id = %id, ?action, status = ?drive.status, "Drive status changed");

        Ok(drive.clone())
    }
}
