//! Cost model, waste score and savings estimate for a single table.
//!
//! These are plain functions over already-drawn values so they can be
//! checked against hand-computed numbers without any randomness.

use super::types::{CapacityMode, TrafficPattern};

/// Average hours in a month.
pub const HOURS_PER_MONTH: f64 = 730.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hourly price of one provisioned read capacity unit.
pub const PROVISIONED_RCU_HOURLY: f64 = 0.00013;
/// Hourly price of one provisioned write capacity unit.
pub const PROVISIONED_WCU_HOURLY: f64 = 0.00065;

/// On-demand price per million read request units.
pub const ON_DEMAND_READ_PER_MILLION: f64 = 0.25;
/// On-demand price per million write request units.
pub const ON_DEMAND_WRITE_PER_MILLION: f64 = 1.25;

/// Flat monthly cost estimate of keeping one unused index.
pub const UNUSED_GSI_MONTHLY_COST: u64 = 50;

const CAPACITY_WASTE_WEIGHT: f64 = 0.6;
const GSI_WASTE_PER_INDEX: f64 = 0.15;
const MODE_MISMATCH_WASTE: f64 = 0.2;

/// Share of spend recovered by moving a spiky provisioned table to on-demand.
pub const ON_DEMAND_SWITCH_SAVINGS: f64 = 0.4;
/// Share of idle capacity spend recovered by right-sizing.
pub const RIGHT_SIZE_RECOVERY: f64 = 0.5;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a non-negative amount to whole currency units.
pub fn whole_units(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// Monthly spend in whole currency units.
///
/// Provisioned tables pay for reserved capacity by the hour. On-demand
/// tables pay per request: consumed units per second are scaled to a monthly
/// request count and priced per million.
pub fn monthly_spend(
    mode: CapacityMode,
    provisioned_rcu: u64,
    provisioned_wcu: u64,
    consumed_rcu: u64,
    consumed_wcu: u64,
) -> u64 {
    let cost = match mode {
        CapacityMode::Provisioned => {
            (provisioned_rcu as f64 * PROVISIONED_RCU_HOURLY
                + provisioned_wcu as f64 * PROVISIONED_WCU_HOURLY)
                * HOURS_PER_MONTH
        }
        CapacityMode::OnDemand => {
            let monthly_reads = consumed_rcu as f64 * SECONDS_PER_HOUR * HOURS_PER_MONTH;
            let monthly_writes = consumed_wcu as f64 * SECONDS_PER_HOUR * HOURS_PER_MONTH;
            monthly_reads / 1_000_000.0 * ON_DEMAND_READ_PER_MILLION
                + monthly_writes / 1_000_000.0 * ON_DEMAND_WRITE_PER_MILLION
        }
    };
    whole_units(cost)
}

/// Fraction of reserved capacity left idle. Zero for on-demand tables.
pub fn capacity_waste(mode: CapacityMode, utilization_factor: f64) -> f64 {
    match mode {
        CapacityMode::Provisioned => (1.0 - utilization_factor).clamp(0.0, 1.0),
        CapacityMode::OnDemand => 0.0,
    }
}

/// Waste score in `[0, 1]`, rounded to two decimals.
pub fn waste_score(
    mode: CapacityMode,
    utilization_factor: f64,
    unused_gsis: usize,
    pattern: TrafficPattern,
) -> f64 {
    let capacity = capacity_waste(mode, utilization_factor);
    let gsi = GSI_WASTE_PER_INDEX * unused_gsis as f64;
    let mode_mismatch = if is_spiky_provisioned(mode, pattern) {
        MODE_MISMATCH_WASTE
    } else {
        0.0
    };

    round2((capacity * CAPACITY_WASTE_WEIGHT + gsi + mode_mismatch).min(1.0))
}

/// Estimated monthly savings in whole currency units.
pub fn savings_potential(
    mode: CapacityMode,
    monthly_spend: u64,
    utilization_factor: f64,
    unused_gsis: usize,
    pattern: TrafficPattern,
) -> u64 {
    let spend = monthly_spend as f64;
    let capacity = capacity_waste(mode, utilization_factor);
    let mut savings = 0.0;

    if is_spiky_provisioned(mode, pattern) {
        savings += spend * ON_DEMAND_SWITCH_SAVINGS;
    }
    if capacity > 0.5 {
        savings += spend * capacity * RIGHT_SIZE_RECOVERY;
    }
    savings += (unused_gsis as u64 * UNUSED_GSI_MONTHLY_COST) as f64;

    whole_units(savings)
}

pub(crate) fn is_spiky_provisioned(mode: CapacityMode, pattern: TrafficPattern) -> bool {
    mode == CapacityMode::Provisioned && pattern == TrafficPattern::Spiky
}
