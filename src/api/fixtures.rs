//! Fixture Endpoints

use mmis_core::models::{location_query, Fixture, FixtureUpdate, NewFixture};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>, ApiError> {
        self.get("/fixtures/", &[]).await
    }

    pub async fn filter_fixtures(&self, project: &str, test_area: &str) -> Result<Vec<Fixture>, ApiError> {
        self.get("/fixtures/filter", &location_query(project, test_area))
            .await
    }

    pub async fn get_fixture(&self, fixture_id: u32) -> Result<Fixture, ApiError> {
        self.get(&format!("/fixtures/{}", fixture_id), &[]).await
    }

    pub async fn create_fixture(&self, fixture: &NewFixture) -> Result<Fixture, ApiError> {
        self.post("/fixtures/", fixture).await
    }

    pub async fn update_fixture(&self, fixture_id: u32, update: &FixtureUpdate) -> Result<serde_json::Value, ApiError> {
        self.put(&format!("/fixtures/{}", fixture_id), update).await
    }
}
