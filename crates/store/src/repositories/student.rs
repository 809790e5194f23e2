use async_trait::async_trait;
use mockall::automock;
use placement_core::{errors::PlacementResult, models::student::StudentRecord};

use crate::InMemoryStore;

#[automock]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn get_student(&self, id: &str) -> PlacementResult<Option<StudentRecord>>;
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn get_student(&self, id: &str) -> PlacementResult<Option<StudentRecord>> {
        Ok(self.students.read().await.get(id).cloned())
    }
}
