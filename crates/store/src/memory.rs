use std::collections::HashMap;

use chrono::Utc;
use placement_core::models::{
    application::{Application, Offer},
    drive::Drive,
    slot::DriveSlot,
    student::StudentRecord,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::seed::{self, SeedData};

/// Process-local store backing every repository trait.
///
/// Each collection sits behind its own lock. Operations that touch two
/// collections take the locks in declaration order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub(crate) drives: RwLock<HashMap<Uuid, Drive>>,
    /// Published slots per drive, kept ordered by start time then panel
    pub(crate) slots: RwLock<HashMap<Uuid, Vec<DriveSlot>>>,
    pub(crate) students: RwLock<HashMap<String, StudentRecord>>,
    pub(crate) applications: RwLock<Vec<Application>>,
    pub(crate) offers: RwLock<HashMap<Uuid, Offer>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo drives, students, applications and offers.
    pub fn seeded() -> Self {
        Self::from_seed(seed::demo_data(Utc::now()))
    }

    pub fn from_seed(data: SeedData) -> Self {
        Self {
            drives: RwLock::new(data.drives.into_iter().map(|d| (d.id, d)).collect()),
            slots: RwLock::new(HashMap::new()),
            students: RwLock::new(
                data.students
                    .into_iter()
                    .map(|s| (s.id.clone(), s))
                    .collect(),
            ),
            applications: RwLock::new(data.applications),
            offers: RwLock::new(data.offers.into_iter().map(|o| (o.id, o)).collect()),
        }
    }

    pub async fn insert_drive(&self, drive: Drive) {
        self.drives.write().await.insert(drive.id, drive);
    }

    pub async fn insert_student(&self, student: StudentRecord) {
        self.students.write().await.insert(student.id.clone(), student);
    }

    pub async fn insert_offer(&self, offer: Offer) {
        self.offers.write().await.insert(offer.id, offer);
    }
}
