//! Shared application state.
//!
//! Holds the current fleet snapshot and the assistant client. The snapshot is
//! replaced wholesale when a new profile is generated; handlers clone what
//! they need out of the read guard.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use fleetwise_core::{
    fleet::{generate_fleet, FleetSnapshot, ProfileKind},
    random::RngSource,
};

use crate::{assistant::CompletionClient, config::Config};

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Current fleet. Swapped, never merged.
    pub fleet: Arc<RwLock<FleetSnapshot>>,
    pub assistant: Arc<dyn CompletionClient>,
}

impl AppState {
    /// Creates state with a freshly generated fleet for the configured
    /// default profile.
    pub fn new(config: Config, assistant: Arc<dyn CompletionClient>) -> Self {
        let snapshot = generate_snapshot(&config.default_profile, config.fleet_seed);

        tracing::info!(
            profile = %snapshot.profile,
            tables = snapshot.tables.len(),
            seeded = config.fleet_seed.is_some(),
            "Generated initial fleet"
        );

        Self {
            config: Arc::new(config),
            fleet: Arc::new(RwLock::new(snapshot)),
            assistant,
        }
    }

    /// Generates a fleet for `profile` and makes it the current snapshot.
    pub async fn regenerate(&self, profile: &ProfileKind) -> FleetSnapshot {
        let snapshot = generate_snapshot(profile, self.config.fleet_seed);

        *self.fleet.write().await = snapshot.clone();

        tracing::info!(
            profile = %snapshot.profile,
            tables = snapshot.tables.len(),
            "Regenerated fleet"
        );

        snapshot
    }
}

/// Runs the generator with a seeded RNG when a seed is configured.
fn generate_snapshot(profile: &ProfileKind, seed: Option<u64>) -> FleetSnapshot {
    let generated_at = Utc::now();
    let tables = match seed {
        Some(seed) => generate_fleet(&mut RngSource::seeded(seed), profile, generated_at),
        None => generate_fleet(&mut RngSource::thread(), profile, generated_at),
    };

    FleetSnapshot::new(profile.as_str(), generated_at, tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::assistant::tests::StubAssistant;

    fn seeded_config(seed: u64) -> Config {
        Config {
            fleet_seed: Some(seed),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_new_generates_default_profile() {
        let state = AppState::new(seeded_config(1), Arc::new(StubAssistant::failing()));

        let fleet = state.fleet.read().await;
        assert_eq!(fleet.profile, "ecommerce");
        assert_eq!(fleet.tables.len(), 70);
    }

    #[tokio::test]
    async fn test_regenerate_replaces_snapshot() {
        let state = AppState::new(seeded_config(1), Arc::new(StubAssistant::failing()));

        let returned = state.regenerate(&ProfileKind::Gaming).await;

        let current = state.fleet.read().await;
        assert_eq!(current.profile, "gaming");
        assert_eq!(current.tables.len(), 45);
        assert_eq!(*current, returned);
    }

    #[test]
    fn test_seeded_snapshots_share_tables() {
        let a = generate_snapshot(&ProfileKind::Financial, Some(99));
        let b = generate_snapshot(&ProfileKind::Financial, Some(99));

        let tables = |s: &FleetSnapshot| -> Vec<(Uuid, String, u64)> {
            s.tables
                .iter()
                .map(|t| (t.id, t.table_name.clone(), t.monthly_spend))
                .collect()
        };
        assert_eq!(tables(&a), tables(&b));
    }
}
