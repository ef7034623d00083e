mod format;
mod generator;
mod profiles;
mod recommendations;
mod scoring;
mod stats;
mod types;

pub use format::{format_currency, waste_category, WasteCategory, WARNING_WASTE_THRESHOLD};
pub use generator::{
    generate_fleet, generate_table, prod_cutoff, sort_by_waste_desc, table_name,
    SUSPICIOUS_GSI_NAMES,
};
pub use profiles::{
    known_profiles, Band, ProfileKind, ProfileSpec, ProfileSummary, UtilizationModel,
};
pub use recommendations::{evaluate_actions, generate_recommendations, primary_action, recommend};
pub use scoring::{monthly_spend, savings_potential, waste_score};
pub use stats::{compute_fleet_stats, savings_percentage, CRITICAL_WASTE_THRESHOLD};
pub use types::{
    Action, ActionType, CapacityMode, Environment, FleetSnapshot, FleetStats, Priority,
    Recommendation, Region, TableRecord, TrafficPattern,
};
