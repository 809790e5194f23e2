use serde::{Deserialize, Serialize};

/// Academic record used to evaluate drive eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub graduation_year: u16,
    pub cgpa: f32,
    pub active_backlogs: u32,
}
