pub mod application;
pub mod drive;
pub mod offer;
pub mod slot;

use placement_core::{
    errors::PlacementError,
    models::{drive::Drive, student::StudentRecord},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

pub(crate) async fn require_drive(state: &ApiState, id: Uuid) -> Result<Drive, AppError> {
    state
        .drives
        .get_drive(id)
        .await?
        .ok_or_else(|| AppError(PlacementError::NotFound(format!("Drive with ID {} not found", id))))
}

pub(crate) async fn require_student(
    state: &ApiState,
    id: &str,
) -> Result<StudentRecord, AppError> {
    state
        .students
        .get_student(id)
        .await?
        .ok_or_else(|| AppError(PlacementError::NotFound(format!("Student {} not found", id))))
}
