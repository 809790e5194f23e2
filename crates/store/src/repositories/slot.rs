use std::collections::HashSet;

use async_trait::async_trait;
use mockall::automock;
use placement_core::{
    errors::{PlacementError, PlacementResult},
    models::slot::{DriveSlot, Slot, SlotStatus},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::InMemoryStore;

#[automock]
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Stores generated slots against a drive.
    ///
    /// Fails with `Conflict` without storing anything if any slot id has
    /// already been published for the drive, so re-publishing the same
    /// generation is detected.
    async fn publish_slots(&self, drive_id: Uuid, slots: Vec<Slot>)
    -> PlacementResult<Vec<DriveSlot>>;

    /// Published slots of a drive ordered by start time, then panel.
    async fn list_slots(
        &self,
        drive_id: Uuid,
        status: Option<SlotStatus>,
    ) -> PlacementResult<Vec<DriveSlot>>;

    async fn get_slot(&self, drive_id: Uuid, slot_id: &str) -> PlacementResult<Option<DriveSlot>>;

    /// Marks an available slot as booked by `student_id`. A student holds at
    /// most one slot per drive.
    async fn book_slot(
        &self,
        drive_id: Uuid,
        slot_id: &str,
        student_id: &str,
    ) -> PlacementResult<DriveSlot>;
}

#[async_trait]
impl SlotRepository for InMemoryStore {
    async fn publish_slots(
        &self,
        drive_id: Uuid,
        slots: Vec<Slot>,
    ) -> PlacementResult<Vec<DriveSlot>> {
        if !self.drives.read().await.contains_key(&drive_id) {
            return Err(PlacementError::NotFound(format!(
                "Drive with ID {} not found",
                drive_id
            )));
        }

        let mut published = self.slots.write().await;
        let existing = published.entry(drive_id).or_default();

        let duplicates = {
            let mut seen: HashSet<&str> = existing.iter().map(|s| s.slot.id.as_str()).collect();
            slots
                .iter()
                .filter(|slot| !seen.insert(slot.id.as_str()))
                .count()
        };
        if duplicates > 0 {
            warn!(%drive_id, duplicates, "Rejected duplicate slot publication");
            return Err(PlacementError::Conflict(format!(
                "{} of {} slots are already published for this drive",
                duplicates,
                slots.len()
            )));
        }

        let added: Vec<DriveSlot> = slots
            .into_iter()
            .map(|slot| DriveSlot {
                drive_id,
                slot,
                booked_by: None,
            })
            .collect();

        existing.extend(added.iter().cloned());
        existing.sort_by(|a, b| {
            (a.slot.start_time, a.slot.panel_index).cmp(&(b.slot.start_time, b.slot.panel_index))
        });

        info!(%drive_id, count = added.len(), "Published interview slots");
        Ok(added)
    }

    async fn list_slots(
        &self,
        drive_id: Uuid,
        status: Option<SlotStatus>,
    ) -> PlacementResult<Vec<DriveSlot>> {
        let published = self.slots.read().await;
        Ok(published
            .get(&drive_id)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|s| status.is_none_or(|st| s.slot.status == st))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_slot(&self, drive_id: Uuid, slot_id: &str) -> PlacementResult<Option<DriveSlot>> {
        let published = self.slots.read().await;
        Ok(published
            .get(&drive_id)
            .and_then(|slots| slots.iter().find(|s| s.slot.id == slot_id))
            .cloned())
    }

    async fn book_slot(
        &self,
        drive_id: Uuid,
        slot_id: &str,
        student_id: &str,
    ) -> PlacementResult<DriveSlot> {
        let mut published = self.slots.write().await;
        let slots = published.get_mut(&drive_id).ok_or_else(|| {
            PlacementError::NotFound(format!("No slots published for drive {}", drive_id))
        })?;

        if slots
            .iter()
            .any(|s| s.booked_by.as_deref() == Some(student_id))
        {
            return Err(PlacementError::Conflict(format!(
                "Student {} already holds a slot for this drive",
                student_id
            )));
        }

        let entry = slots
            .iter_mut()
            .find(|s| s.slot.id == slot_id)
            .ok_or_else(|| PlacementError::NotFound(format!("Slot {} not found", slot_id)))?;

        if !entry.slot.is_available() {
            return Err(PlacementError::Conflict(format!(
                "Slot {} is already booked",
                slot_id
            )));
        }

        entry.slot = entry.slot.with_status(SlotStatus::Booked);
        entry.booked_by = Some(student_id.to_string());
        info!(%drive_id, slot_id, student_id, "Booked interview slot");

        Ok(entry.clone())
    }
}
