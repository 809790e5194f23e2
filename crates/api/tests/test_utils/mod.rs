use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use chrono_tz::Tz;
use placement_api::{ApiState, router};
use placement_core::{eligibility::CriteriaPolicy, models::drive::Drive};
use placement_store::{
    InMemoryStore,
    repositories::{
        application::MockApplicationRepository, drive::MockDriveRepository,
        offer::MockOfferRepository, slot::MockSlotRepository, student::MockStudentRepository,
    },
    seed::{SeedData, demo_data},
};

/// A server over the seeded in-memory store.
pub struct TestContext {
    pub seed: SeedData,
    pub store: Arc<InMemoryStore>,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_timezone(Tz::UTC)
    }

    pub fn with_timezone(default_timezone: Tz) -> Self {
        let seed = demo_data(Utc::now());
        let store = Arc::new(InMemoryStore::from_seed(seed.clone()));
        let state = ApiState::from_store(store.clone(), default_timezone);
        let server = TestServer::new(router(Arc::new(state))).unwrap();

        Self {
            seed,
            store,
            server,
        }
    }

    pub fn drive(&self, company_name: &str) -> &Drive {
        self.seed
            .drives
            .iter()
            .find(|d| d.company_name == company_name)
            .unwrap()
    }

    pub fn drive_path(&self, company_name: &str, suffix: &str) -> String {
        format!("/api/drives/{}{}", self.drive(company_name).id, suffix)
    }
}

/// Repository mocks for tests that pin down exactly what a handler stores.
pub struct MockRepos {
    pub drives: MockDriveRepository,
    pub slots: MockSlotRepository,
    pub students: MockStudentRepository,
    pub applications: MockApplicationRepository,
    pub offers: MockOfferRepository,
}

impl MockRepos {
    pub fn new() -> Self {
        Self {
            drives: MockDriveRepository::new(),
            slots: MockSlotRepository::new(),
            students: MockStudentRepository::new(),
            applications: MockApplicationRepository::new(),
            offers: MockOfferRepository::new(),
        }
    }

    pub fn into_server(self) -> TestServer {
        let state = ApiState {
            drives: Arc::new(self.drives),
            slots: Arc::new(self.slots),
            students: Arc::new(self.students),
            applications: Arc::new(self.applications),
            offers: Arc::new(self.offers),
            eligibility: Arc::new(CriteriaPolicy),
            default_timezone: Tz::UTC,
        };
        TestServer::new(router(Arc::new(state))).unwrap()
    }
}

pub fn scenario_request() -> serde_json::Value {
    serde_json::json!({
        "date": "2025-12-10",
        "start_time": "09:00",
        "end_time": "10:00",
        "duration_minutes": 30,
        "panel_count": 2
    })
}
