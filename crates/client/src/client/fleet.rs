//! Fleet API operations.

use serde::Serialize;
use uuid::Uuid;

use fleetwise_core::fleet::{
    FleetSnapshot, FleetStats, ProfileSummary, Recommendation, TableRecord,
};

use super::FleetwiseClient;
use crate::error::Result;

/// Request for regenerating the fleet.
#[derive(Debug, Serialize)]
pub struct RegenerateFleetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl FleetwiseClient {
    /// List the industry profiles.
    pub async fn list_profiles(&self) -> Result<Vec<ProfileSummary>> {
        let response = self.client.get(self.url("/api/profiles")).send().await?;
        self.handle_response(response, "profiles").await
    }

    /// Get the current fleet snapshot.
    pub async fn get_fleet(&self) -> Result<FleetSnapshot> {
        let response = self.client.get(self.url("/api/fleet")).send().await?;
        self.handle_response(response, "fleet").await
    }

    /// Generate a new fleet for `profile` (server default when `None`).
    pub async fn regenerate_fleet(&self, req: RegenerateFleetRequest) -> Result<FleetSnapshot> {
        let response = self
            .client
            .post(self.url("/api/fleet"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response, "fleet").await
    }

    /// Get one table by ID.
    pub async fn get_table(&self, id: Uuid) -> Result<TableRecord> {
        let response = self
            .client
            .get(self.url(&format!("/api/fleet/tables/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("table {}", id)).await
    }

    /// Get fleet-wide stats.
    pub async fn get_stats(&self) -> Result<FleetStats> {
        let response = self.client.get(self.url("/api/fleet/stats")).send().await?;
        self.handle_response(response, "stats").await
    }

    /// List recommendations, highest savings first.
    pub async fn list_recommendations(&self, limit: Option<usize>) -> Result<Vec<Recommendation>> {
        let mut request = self.client.get(self.url("/api/fleet/recommendations"));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let response = request.send().await?;
        self.handle_response(response, "recommendations").await
    }
}
