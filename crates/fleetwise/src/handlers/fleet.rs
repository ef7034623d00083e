//! Fleet snapshot, stats and recommendation handlers.
//!
//! All reads work on the current snapshot; `POST /api/fleet` replaces it.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use fleetwise_core::{
    fleet::{
        compute_fleet_stats, generate_recommendations, FleetSnapshot, FleetStats, ProfileKind,
        Recommendation, TableRecord,
    },
    serde::{deserialize_optional_string, deserialize_optional_usize},
};

use crate::{
    handlers::{error::FleetError, AppError},
    state::AppState,
};

/// Body for regenerating the fleet.
#[derive(Debug, Default, Deserialize)]
pub struct RegenerateFleet {
    /// Industry profile tag; the configured default when absent or blank.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile: Option<String>,
}

/// Query parameters for listing recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    /// Maximum number of recommendations (default from config).
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub limit: Option<usize>,
}

/// Get the current fleet snapshot (GET /api/fleet).
pub async fn get_fleet(State(state): State<AppState>) -> Json<FleetSnapshot> {
    Json(state.fleet.read().await.clone())
}

/// Generate a new fleet and replace the current one (POST /api/fleet).
pub async fn regenerate_fleet(
    State(state): State<AppState>,
    Json(payload): Json<RegenerateFleet>,
) -> Json<FleetSnapshot> {
    let profile = payload
        .profile
        .as_deref()
        .map(ProfileKind::parse)
        .unwrap_or_else(|| state.config.default_profile.clone());

    if !profile.is_known() {
        tracing::debug!(%profile, "Unknown profile, using fallback profile");
    }

    Json(state.regenerate(&profile).await)
}

/// Get one table from the current fleet (GET /api/fleet/tables/{id}).
pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TableRecord>, AppError> {
    state
        .fleet
        .read()
        .await
        .table(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| FleetError::TableNotFound(id).into())
}

/// Aggregate stats for the current fleet (GET /api/fleet/stats).
pub async fn get_stats(State(state): State<AppState>) -> Json<FleetStats> {
    Json(compute_fleet_stats(&state.fleet.read().await.tables))
}

/// Top recommendations for the current fleet (GET /api/fleet/recommendations).
pub async fn list_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Json<Vec<Recommendation>> {
    let limit = query.limit.unwrap_or(state.config.recommendation_limit);
    let fleet = state.fleet.read().await;

    Json(generate_recommendations(&fleet.tables, limit))
}
