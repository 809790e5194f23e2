use async_trait::async_trait;
use chrono::Utc;
use mockall::automock;
use placement_core::{
    errors::{PlacementError, PlacementResult},
    models::application::{Application, ApplicationStatus, NewApplication},
};
use tracing::info;
use uuid::Uuid;

use crate::InMemoryStore;

#[automock]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Records a registration. A student registers for a drive once.
    async fn register(&self, application: NewApplication) -> PlacementResult<Application>;

    /// Applications of a student, most recent first.
    async fn applications_for_student(&self, student_id: &str) -> PlacementResult<Vec<Application>>;
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn register(&self, new: NewApplication) -> PlacementResult<Application> {
        let mut applications = self.applications.write().await;

        if applications
            .iter()
            .any(|a| a.drive_id == new.drive_id && a.student_id == new.student_id)
        {
            return Err(PlacementError::Conflict(format!(
                "Student {} is already registered for drive {}",
                new.student_id, new.drive_id
            )));
        }

        let application = Application {
            id: Uuid::new_v4(),
            drive_id: new.drive_id,
            student_id: new.student_id,
            status: ApplicationStatus::Registered,
            applied_at: Utc::now(),
            next_step: None,
            resume_url: new.resume_url,
            linkedin_url: new.linkedin_url,
            portfolio_url: new.portfolio_url,
        };
        applications.push(application.clone());
        info!(
            application_id = %application.id,
            drive_id = %application.drive_id,
            student_id = %application.student_id,
            "Registered application"
        );

        Ok(application)
    }

    async fn applications_for_student(&self, student_id: &str) -> PlacementResult<Vec<Application>> {
        let applications = self.applications.read().await;
        let mut listed: Vec<Application> = applications
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(listed)
    }
}
