//! Fleet-wide aggregation.

use super::types::{FleetStats, TableRecord};

/// Waste score at or above which a table counts as critical.
pub const CRITICAL_WASTE_THRESHOLD: f64 = 0.7;

/// Reduces a set of tables to fleet-wide statistics.
///
/// An empty slice yields all-zero stats, and a fleet with zero total spend
/// reports a savings percentage of 0 rather than dividing by zero.
pub fn compute_fleet_stats(tables: &[TableRecord]) -> FleetStats {
    if tables.is_empty() {
        return FleetStats::default();
    }

    let total_monthly_spend: u64 = tables.iter().map(|t| t.monthly_spend).sum();
    let total_savings_potential: u64 = tables.iter().map(|t| t.savings_potential).sum();
    let critical_tables = tables
        .iter()
        .filter(|t| t.waste_score >= CRITICAL_WASTE_THRESHOLD)
        .count();
    let utilization_sum: u64 = tables
        .iter()
        .map(|t| u64::from(t.utilization_percent))
        .sum();
    let total_unused_gsis = tables.iter().map(|t| t.unused_gsis.len()).sum();

    FleetStats {
        total_tables: tables.len(),
        total_monthly_spend,
        total_savings_potential,
        critical_tables,
        avg_utilization: (utilization_sum as f64 / tables.len() as f64).round() as u8,
        total_unused_gsis,
        savings_percentage: savings_percentage(total_savings_potential, total_monthly_spend),
    }
}

/// `round(savings / spend * 100)`, or 0 when there is no spend.
pub fn savings_percentage(savings: u64, spend: u64) -> u64 {
    if spend == 0 {
        return 0;
    }
    (savings as f64 / spend as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::generate_fleet;
    use crate::fleet::types::{CapacityMode, Environment, Region, TrafficPattern};
    use crate::fleet::ProfileKind;
    use crate::random::RngSource;
    use chrono::Utc;
    use uuid::Uuid;

    fn table(spend: u64, savings: u64, waste: f64, utilization: u8, unused: usize) -> TableRecord {
        TableRecord {
            id: Uuid::new_v4(),
            table_name: "orders-prod-001".to_string(),
            region: Region::EuWest1,
            environment: Environment::Prod,
            capacity_mode: CapacityMode::OnDemand,
            provisioned_rcu: None,
            provisioned_wcu: None,
            consumed_rcu: 10,
            consumed_wcu: 10,
            utilization_percent: utilization,
            gsi_count: 3,
            unused_gsis: vec!["gsi-old-status".to_string(); unused],
            traffic_pattern: TrafficPattern::Bursty,
            monthly_spend: spend,
            waste_score: waste,
            savings_potential: savings,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_compute_fleet_stats() {
        let tables = vec![
            table(1000, 300, 0.8, 20, 2),
            table(500, 0, 0.7, 50, 0),
            table(250, 50, 0.2, 81, 1),
        ];

        let stats = compute_fleet_stats(&tables);

        assert_eq!(stats.total_tables, 3);
        assert_eq!(stats.total_monthly_spend, 1750);
        assert_eq!(stats.total_savings_potential, 350);
        assert_eq!(stats.critical_tables, 2);
        // (20 + 50 + 81) / 3 = 50.33
        assert_eq!(stats.avg_utilization, 50);
        assert_eq!(stats.total_unused_gsis, 3);
        assert_eq!(stats.savings_percentage, 20);
    }

    #[test]
    fn test_empty_fleet_is_all_zero() {
        assert_eq!(compute_fleet_stats(&[]), FleetStats::default());
    }

    #[test]
    fn test_zero_spend_fleet_has_zero_percentage() {
        let stats = compute_fleet_stats(&[table(0, 100, 0.3, 40, 2)]);

        assert_eq!(stats.total_monthly_spend, 0);
        assert_eq!(stats.savings_percentage, 0);
    }

    #[test]
    fn test_savings_percentage_rounds() {
        assert_eq!(savings_percentage(1, 3), 33);
        assert_eq!(savings_percentage(2, 3), 67);
        assert_eq!(savings_percentage(0, 10), 0);
    }

    #[test]
    fn test_stats_agree_with_generated_fleet() {
        let mut rng = RngSource::seeded(11);
        let tables = generate_fleet(&mut rng, &ProfileKind::Ecommerce, Utc::now());

        let stats = compute_fleet_stats(&tables);

        let spend: u64 = tables.iter().map(|t| t.monthly_spend).sum();
        let savings: u64 = tables.iter().map(|t| t.savings_potential).sum();
        let critical = tables.iter().filter(|t| t.waste_score >= 0.7).count();

        assert_eq!(stats.total_tables, 70);
        assert_eq!(stats.total_monthly_spend, spend);
        assert_eq!(stats.critical_tables, critical);
        assert_eq!(
            stats.savings_percentage,
            (savings as f64 / spend as f64 * 100.0).round() as u64
        );
    }
}
