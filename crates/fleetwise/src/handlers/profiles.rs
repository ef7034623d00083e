use axum::Json;

use fleetwise_core::fleet::{known_profiles, ProfileSummary};

/// List the industry profiles with dedicated specs (GET /api/profiles).
pub async fn list_profiles() -> Json<Vec<ProfileSummary>> {
    Json(known_profiles())
}
