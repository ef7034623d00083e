use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deployment environment a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Prod,
    Staging,
    Dev,
    Test,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Prod,
        Environment::Staging,
        Environment::Dev,
        Environment::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Staging => "staging",
            Environment::Dev => "dev",
            Environment::Test => "test",
        }
    }
}

/// Region a table is hosted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::UsEast1,
        Region::UsWest2,
        Region::EuWest1,
        Region::ApSoutheast1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
            Region::ApSoutheast1 => "ap-southeast-1",
        }
    }
}

/// Billing/capacity mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityMode {
    /// Fixed throughput reserved and paid for regardless of use.
    Provisioned,
    /// Billed per consumed request unit.
    OnDemand,
}

impl CapacityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityMode::Provisioned => "PROVISIONED",
            CapacityMode::OnDemand => "ON_DEMAND",
        }
    }
}

/// Qualitative shape of request volume over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficPattern {
    Steady,
    Spiky,
    Bursty,
}

impl TrafficPattern {
    pub const ALL: [TrafficPattern; 3] = [
        TrafficPattern::Steady,
        TrafficPattern::Spiky,
        TrafficPattern::Bursty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficPattern::Steady => "STEADY",
            TrafficPattern::Spiky => "SPIKY",
            TrafficPattern::Bursty => "BURSTY",
        }
    }
}

/// One simulated database table with its derived cost metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub id: Uuid,
    pub table_name: String,
    pub region: Region,
    pub environment: Environment,
    pub capacity_mode: CapacityMode,
    /// Present only for provisioned tables.
    #[serde(rename = "provisionedRCU")]
    pub provisioned_rcu: Option<u64>,
    /// Present only for provisioned tables.
    #[serde(rename = "provisionedWCU")]
    pub provisioned_wcu: Option<u64>,
    #[serde(rename = "consumedRCU")]
    pub consumed_rcu: u64,
    #[serde(rename = "consumedWCU")]
    pub consumed_wcu: u64,
    pub utilization_percent: u8,
    pub gsi_count: u8,
    #[serde(rename = "unusedGSIs")]
    pub unused_gsis: Vec<String>,
    pub traffic_pattern: TrafficPattern,
    pub monthly_spend: u64,
    /// In `[0, 1]`, rounded to two decimals.
    pub waste_score: f64,
    pub savings_potential: u64,
    pub last_updated: DateTime<Utc>,
}

impl TableRecord {
    pub fn is_provisioned(&self) -> bool {
        self.capacity_mode == CapacityMode::Provisioned
    }

    /// Utilization as a fraction in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        f64::from(self.utilization_percent) / 100.0
    }

    pub fn unused_gsi_count(&self) -> usize {
        self.unused_gsis.len()
    }
}

/// Fleet-wide summary derived from a set of tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_tables: usize,
    pub total_monthly_spend: u64,
    pub total_savings_potential: u64,
    /// Tables whose waste score is at least 0.7.
    pub critical_tables: usize,
    pub avg_utilization: u8,
    #[serde(rename = "totalUnusedGSIs")]
    pub total_unused_gsis: usize,
    pub savings_percentage: u64,
}

/// Kind of optimization an [`Action`] proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    SwitchToOndemand,
    RightSize,
    RemoveGsi,
    AddDax,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::SwitchToOndemand => "SWITCH_TO_ONDEMAND",
            ActionType::RightSize => "RIGHT_SIZE",
            ActionType::RemoveGsi => "REMOVE_GSI",
            ActionType::AddDax => "ADD_DAX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// A single proposed change for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub title: String,
    pub description: String,
    pub estimated_savings: u64,
    pub priority: Priority,
    /// Display-only glyph for UIs.
    pub icon: String,
}

/// All triggered actions for one table, with the best one singled out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub table_id: Uuid,
    pub table_name: String,
    pub environment: Environment,
    pub region: Region,
    pub monthly_spend: u64,
    pub waste_score: f64,
    /// The table's savings potential, not the sum of action estimates.
    pub total_savings: u64,
    pub all_actions: Vec<Action>,
    pub primary_action: Action,
}

/// The fleet produced by one generation run.
///
/// Runs are never merged: selecting a profile replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    pub profile: String,
    pub generated_at: DateTime<Utc>,
    pub tables: Vec<TableRecord>,
}

impl FleetSnapshot {
    pub fn new(
        profile: impl Into<String>,
        generated_at: DateTime<Utc>,
        tables: Vec<TableRecord>,
    ) -> Self {
        Self {
            profile: profile.into(),
            generated_at,
            tables,
        }
    }

    /// Looks up a table by id.
    pub fn table(&self, id: Uuid) -> Option<&TableRecord> {
        self.tables.iter().find(|t| t.id == id)
    }
}
