use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator input for one slot generation run.
///
/// Dates and times are the raw strings collected by the form; the generator
/// parses and validates them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Local time of day, `HH:MM` or `HH:MM:SS`
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub duration_minutes: u32,
    pub panel_count: u32,
    /// IANA zone the local times are expressed in
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// 1-based parallel panel
    pub panel_index: u32,
    pub status: SlotStatus,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }

    /// Returns a copy of this slot carrying a new status.
    pub fn with_status(&self, status: SlotStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// A published slot as held by the store, tied to its drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSlot {
    pub drive_id: uuid::Uuid,
    #[serde(flatten)]
    pub slot: Slot,
    pub booked_by: Option<String>,
}
