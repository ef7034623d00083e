//! Synthetic fleet generation.
//!
//! Pure functions apart from the injected [`RandomSource`]: given the same
//! sequence of draws they produce the same tables, ids included.
//!
//! The draw order inside [`generate_table`] is fixed:
//! capacity mode, traffic tier, base RCU, base WCU, utilization, index
//! count, unused-index coin and names, traffic pattern, region, then the
//! sixteen bytes of the table id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::profiles::{ProfileKind, ProfileSpec};
use super::scoring;
use super::types::{CapacityMode, Environment, Region, TableRecord, TrafficPattern};
use crate::random::RandomSource;

/// Probability a table uses provisioned capacity.
const PROVISIONED_PROBABILITY: f64 = 0.7;
/// Probability a table sits in the high-traffic tier.
const HIGH_TRAFFIC_PROBABILITY: f64 = 0.4;
/// Probability a table with indexes has some that are unused.
const UNUSED_GSI_PROBABILITY: f64 = 0.5;
/// Share of a fleet (by position) pinned to the prod environment.
const PROD_SHARE: f64 = 0.6;

const MAX_GSI_COUNT: u64 = 5;
const MAX_UNUSED_GSIS: u64 = 3;
/// Draws consumed by [`draw_id`].
const ID_DRAWS: usize = 16;

/// Index names that look abandoned.
pub const SUSPICIOUS_GSI_NAMES: &[&str] = &[
    "gsi-legacy-idx",
    "gsi-old-status",
    "gsi-deprecated-email",
    "gsi-temp-migration",
    "gsi-unused-timestamp",
    "gsi-test-index",
];

/// Inclusive capacity ranges for one traffic tier.
#[derive(Debug, Clone, Copy)]
struct CapacityTier {
    rcu: (u64, u64),
    wcu: (u64, u64),
}

const HIGH_TRAFFIC: CapacityTier = CapacityTier {
    rcu: (2_000, 40_000),
    wcu: (500, 10_000),
};

const NORMAL_TRAFFIC: CapacityTier = CapacityTier {
    rcu: (50, 2_500),
    wcu: (25, 800),
};

/// Builds the human-readable table name, e.g. `orders-prod-007`.
pub fn table_name(prefix: &str, environment: Environment, index: usize) -> String {
    format!("{}-{}-{:03}", prefix, environment.as_str(), index)
}

/// Synthesizes one table.
///
/// `index` is the 1-based position used in the table name.
pub fn generate_table<R: RandomSource + ?Sized>(
    rng: &mut R,
    prefix: &str,
    environment: Environment,
    index: usize,
    profile: &ProfileSpec,
    generated_at: DateTime<Utc>,
) -> TableRecord {
    let capacity_mode = if rng.chance(PROVISIONED_PROBABILITY) {
        CapacityMode::Provisioned
    } else {
        CapacityMode::OnDemand
    };

    let tier = if rng.chance(HIGH_TRAFFIC_PROBABILITY) {
        HIGH_TRAFFIC
    } else {
        NORMAL_TRAFFIC
    };
    let base_rcu = rng.int_between(tier.rcu.0, tier.rcu.1);
    let base_wcu = rng.int_between(tier.wcu.0, tier.wcu.1);

    let utilization_factor = profile.utilization.sample(rng);
    let consumed_rcu = (base_rcu as f64 * utilization_factor).floor() as u64;
    let consumed_wcu = (base_wcu as f64 * utilization_factor).floor() as u64;
    let utilization_percent = (utilization_factor * 100.0).round() as u8;

    let gsi_count = rng.int_between(0, MAX_GSI_COUNT);
    let unused_gsis = draw_unused_gsis(rng, gsi_count);

    let traffic_pattern = *rng.choose(&TrafficPattern::ALL);
    let region = *rng.choose(&Region::ALL);
    let id = draw_id(rng);

    let monthly_spend = scoring::monthly_spend(
        capacity_mode,
        base_rcu,
        base_wcu,
        consumed_rcu,
        consumed_wcu,
    );
    let waste_score = scoring::waste_score(
        capacity_mode,
        utilization_factor,
        unused_gsis.len(),
        traffic_pattern,
    );
    let savings_potential = scoring::savings_potential(
        capacity_mode,
        monthly_spend,
        utilization_factor,
        unused_gsis.len(),
        traffic_pattern,
    );

    let (provisioned_rcu, provisioned_wcu) = match capacity_mode {
        CapacityMode::Provisioned => (Some(base_rcu), Some(base_wcu)),
        CapacityMode::OnDemand => (None, None),
    };

    TableRecord {
        id,
        table_name: table_name(prefix, environment, index),
        region,
        environment,
        capacity_mode,
        provisioned_rcu,
        provisioned_wcu,
        consumed_rcu,
        consumed_wcu,
        utilization_percent,
        gsi_count: gsi_count as u8,
        unused_gsis,
        traffic_pattern,
        monthly_spend,
        waste_score,
        savings_potential,
        last_updated: generated_at,
    }
}

/// Samples unused index names, with replacement, from the suspicious catalog.
fn draw_unused_gsis<R: RandomSource + ?Sized>(rng: &mut R, gsi_count: u64) -> Vec<String> {
    if gsi_count == 0 || !rng.chance(UNUSED_GSI_PROBABILITY) {
        return Vec::new();
    }

    let unused = rng.int_between(1, gsi_count.min(MAX_UNUSED_GSIS));
    (0..unused)
        .map(|_| rng.choose(SUSPICIOUS_GSI_NAMES).to_string())
        .collect()
}

/// Builds a v4 UUID from sixteen byte draws on the source.
fn draw_id<R: RandomSource + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; ID_DRAWS];
    for byte in &mut bytes {
        *byte = rng.int_between(0, u8::MAX as u64) as u8;
    }
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Environment for the table at 0-based `position`.
///
/// Positions before `cutoff` are prod without consuming a draw; the rest
/// pick uniformly from every environment.
pub fn environment_for<R: RandomSource + ?Sized>(
    rng: &mut R,
    position: usize,
    cutoff: usize,
) -> Environment {
    if position < cutoff {
        Environment::Prod
    } else {
        *rng.choose(&Environment::ALL)
    }
}

/// Number of leading positions pinned to prod for a fleet of `count` tables.
pub fn prod_cutoff(count: usize) -> usize {
    (count as f64 * PROD_SHARE).floor() as usize
}

/// Generates a full fleet for `profile`, sorted by waste score (highest first).
///
/// The first 60% of tables by position are prod; the rest draw an
/// environment uniformly, prod included. Ties in waste score keep
/// generation order.
pub fn generate_fleet<R: RandomSource + ?Sized>(
    rng: &mut R,
    profile: &ProfileKind,
    generated_at: DateTime<Utc>,
) -> Vec<TableRecord> {
    let spec = profile.spec();
    let cutoff = prod_cutoff(spec.table_count);

    let mut tables: Vec<TableRecord> = (0..spec.table_count)
        .map(|i| {
            let environment = environment_for(rng, i, cutoff);
            generate_table(
                rng,
                spec.prefix_for(i),
                environment,
                i + 1,
                &spec,
                generated_at,
            )
        })
        .collect();

    sort_by_waste_desc(&mut tables);
    tables
}

/// Stable sort by waste score, highest first.
pub fn sort_by_waste_desc(tables: &mut [TableRecord]) {
    tables.sort_by(|a, b| b.waste_score.total_cmp(&a.waste_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// The 1-based generation index carried at the end of a table name.
    fn name_index(table: &TableRecord) -> usize {
        table.table_name.rsplit('-').next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_table_name_is_zero_padded() {
        assert_eq!(
            table_name("orders", Environment::Prod, 7),
            "orders-prod-007"
        );
        assert_eq!(
            table_name("ledger", Environment::Dev, 123),
            "ledger-dev-123"
        );
    }

    #[test]
    fn test_scripted_provisioned_spiky_table() {
        let spec = ProfileKind::Financial.spec();
        let mut rng = SequenceSource::new([
            0.1,  // provisioned
            0.9,  // normal traffic tier
            0.0,  // base RCU = 50
            0.0,  // base WCU = 25
            0.0,  // utilization = 0.15
            0.2,  // gsi_count = 1
            0.1,  // has unused indexes
            0.0,  // one unused
            0.0,  // gsi-legacy-idx
            0.4,  // SPIKY
            0.0,  // us-east-1
            0.5,  // id bytes
        ]);

        let table = generate_table(&mut rng, "ledger", Environment::Prod, 3, &spec, now());

        assert_eq!(rng.consumed(), 11 + ID_DRAWS);
        assert_eq!(table.table_name, "ledger-prod-003");
        assert_eq!(table.capacity_mode, CapacityMode::Provisioned);
        assert_eq!(table.provisioned_rcu, Some(50));
        assert_eq!(table.provisioned_wcu, Some(25));
        assert_eq!(table.consumed_rcu, 7);
        assert_eq!(table.consumed_wcu, 3);
        assert_eq!(table.utilization_percent, 15);
        assert_eq!(table.gsi_count, 1);
        assert_eq!(table.unused_gsis, vec!["gsi-legacy-idx".to_string()]);
        assert_eq!(table.traffic_pattern, TrafficPattern::Spiky);
        assert_eq!(table.region, Region::UsEast1);
        // (50 * 0.00013 + 25 * 0.00065) * 730 = 16.61
        assert_eq!(table.monthly_spend, 17);
        // 0.85 * 0.6 + 0.15 + 0.2 = 0.86
        assert_eq!(table.waste_score, 0.86);
        // 17 * 0.4 + 17 * 0.85 * 0.5 + 50 = 64.0
        assert_eq!(table.savings_potential, 64);
        assert_eq!(table.last_updated, now());
    }

    #[test]
    fn test_scripted_on_demand_table_without_indexes() {
        let spec = ProfileKind::Gaming.spec();
        let mut rng = SequenceSource::new([
            0.95, // on-demand
            0.1,  // high traffic tier
            0.5,  // base RCU
            0.5,  // base WCU
            0.9,  // low band
            0.5,  // utilization = 0.25
            0.0,  // gsi_count = 0, no coin flip
            0.0,  // STEADY
            0.99, // ap-southeast-1
        ]);

        let table = generate_table(&mut rng, "guilds", Environment::Test, 12, &spec, now());

        assert_eq!(rng.consumed(), 9 + ID_DRAWS);
        assert_eq!(table.capacity_mode, CapacityMode::OnDemand);
        assert_eq!(table.provisioned_rcu, None);
        assert_eq!(table.provisioned_wcu, None);
        assert_eq!(table.utilization_percent, 25);
        assert!(table.unused_gsis.is_empty());
        assert_eq!(table.gsi_count, 0);
        assert_eq!(table.region, Region::ApSoutheast1);
        assert_eq!(table.waste_score, 0.0);
        assert_eq!(table.savings_potential, 0);
        assert!(table.monthly_spend > 0);
    }

    #[test]
    fn test_failed_coin_flip_leaves_indexes_in_use() {
        let spec = ProfileKind::Ecommerce.spec();
        let mut rng = SequenceSource::new([
            0.1, 0.9, 0.0, 0.0, 0.5, 0.0, // mode, tier, rcu, wcu, band, util
            0.99, // gsi_count = 5
            0.6,  // coin flip fails
            0.7,  // BURSTY
            0.3,  // us-west-2
        ]);

        let table = generate_table(&mut rng, "orders", Environment::Prod, 1, &spec, now());

        assert_eq!(table.gsi_count, 5);
        assert!(table.unused_gsis.is_empty());
        assert_eq!(table.traffic_pattern, TrafficPattern::Bursty);
        assert_eq!(table.region, Region::UsWest2);
    }

    #[test]
    fn test_unused_gsis_capped_at_three() {
        let spec = ProfileKind::Ecommerce.spec();
        let mut rng = SequenceSource::new([
            0.1, 0.9, 0.0, 0.0, 0.5, 0.0, // mode, tier, rcu, wcu, band, util
            0.99, // gsi_count = 5
            0.1,  // coin flip succeeds
            0.99, // three unused
            0.0, 0.5, 0.99, // names
            0.0, 0.0, // pattern, region
        ]);

        let table = generate_table(&mut rng, "orders", Environment::Prod, 1, &spec, now());

        assert_eq!(
            table.unused_gsis,
            vec![
                "gsi-legacy-idx".to_string(),
                "gsi-temp-migration".to_string(),
                "gsi-test-index".to_string(),
            ]
        );
    }

    #[test]
    fn test_fleet_sizes_per_profile() {
        let mut rng = RngSource::seeded(1);
        let cases = [
            ("ecommerce", 70),
            ("gaming", 45),
            ("financial", 90),
            ("unknown", 50),
        ];

        for (tag, expected) in cases {
            let fleet = generate_fleet(&mut rng, &ProfileKind::parse(tag), now());
            assert_eq!(fleet.len(), expected, "profile {tag}");
        }
    }

    #[test]
    fn test_fleet_sorted_by_waste_desc() {
        let mut rng = RngSource::seeded(2);
        for kind in ProfileKind::KNOWN
            .iter()
            .cloned()
            .chain([ProfileKind::parse("unknown")])
        {
            let fleet = generate_fleet(&mut rng, &kind, now());

            assert!(
                fleet
                    .windows(2)
                    .all(|pair| pair[0].waste_score >= pair[1].waste_score),
                "profile {kind}"
            );
        }
    }

    #[test]
    fn test_table_invariants_hold_across_many_fleets() {
        for seed in 0..40 {
            let mut rng = RngSource::seeded(seed);
            for kind in ProfileKind::KNOWN
                .iter()
                .cloned()
                .chain([ProfileKind::parse("misc")])
            {
                for table in generate_fleet(&mut rng, &kind, now()) {
                    assert!((0.0..=1.0).contains(&table.waste_score));
                    assert!(table.utilization_percent <= 100);
                    assert!(table.gsi_count as u64 <= MAX_GSI_COUNT);
                    assert!(table.unused_gsis.len() <= table.gsi_count as usize);
                    assert!(table.unused_gsis.len() <= MAX_UNUSED_GSIS as usize);

                    match table.capacity_mode {
                        CapacityMode::Provisioned => {
                            let rcu = table.provisioned_rcu.unwrap();
                            let wcu = table.provisioned_wcu.unwrap();
                            assert!(rcu > 0 && wcu > 0);
                            assert!(table.consumed_rcu <= rcu);
                            assert!(table.consumed_wcu <= wcu);
                        }
                        CapacityMode::OnDemand => {
                            assert!(table.provisioned_rcu.is_none());
                            assert!(table.provisioned_wcu.is_none());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_leading_positions_are_prod() {
        let mut rng = RngSource::seeded(3);
        let fleet = generate_fleet(&mut rng, &ProfileKind::Financial, now());
        let cutoff = prod_cutoff(fleet.len());

        assert_eq!(cutoff, 54);

        for table in &fleet {
            if name_index(table) <= cutoff {
                assert_eq!(table.environment, Environment::Prod, "{}", table.table_name);
            }
        }
    }

    #[test]
    fn test_prefixes_cycle_through_catalog() {
        let mut rng = RngSource::seeded(4);
        let spec = ProfileKind::Gaming.spec();
        let fleet = generate_fleet(&mut rng, &ProfileKind::Gaming, now());

        for table in &fleet {
            let index = name_index(table);
            assert!(table.table_name.starts_with(spec.prefix_for(index - 1)));
        }
    }

    #[test]
    fn test_sort_keeps_generation_order_on_ties() {
        let spec = ProfileKind::Ecommerce.spec();
        let mut draws = vec![0.95, 0.9, 0.5, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0];
        draws.extend([0.5; ID_DRAWS]);
        let mut rng = SequenceSource::new(draws);
        let mut tables: Vec<TableRecord> = (1..=3)
            .map(|i| generate_table(&mut rng, "orders", Environment::Prod, i, &spec, now()))
            .collect();

        sort_by_waste_desc(&mut tables);

        let names: Vec<&str> = tables.iter().map(|t| t.table_name.as_str()).collect();
        assert_eq!(names, ["orders-prod-001", "orders-prod-002", "orders-prod-003"]);
    }

    #[test]
    fn test_seeded_fleets_match_including_ids() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);

        let first = generate_fleet(&mut a, &ProfileKind::Gaming, now());
        let second = generate_fleet(&mut b, &ProfileKind::Gaming, now());

        let key = |t: &TableRecord| (t.id, t.table_name.clone(), t.waste_score);
        assert_eq!(
            first.iter().map(key).collect::<Vec<_>>(),
            second.iter().map(key).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_same_draws_give_same_id() {
        let spec = ProfileKind::Ecommerce.spec();
        let mut a = SequenceSource::new([0.3]);
        let mut b = SequenceSource::new([0.3]);

        let first = generate_table(&mut a, "orders", Environment::Prod, 1, &spec, now());
        let second = generate_table(&mut b, "orders", Environment::Prod, 1, &spec, now());

        assert_eq!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 4);
    }

    #[test]
    fn test_ids_are_unique_within_a_fleet() {
        let mut rng = RngSource::seeded(8);
        let fleet = generate_fleet(&mut rng, &ProfileKind::Financial, now());

        let ids: std::collections::HashSet<Uuid> = fleet.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), fleet.len());
    }

    #[test]
    fn test_id_bytes_follow_draws() {
        let mut low = SequenceSource::new([0.0]);
        let mut high = SequenceSource::new([0.9999]);

        let low_id = draw_id(&mut low);
        let high_id = draw_id(&mut high);

        assert_eq!(low.consumed(), ID_DRAWS);
        assert_eq!(low_id.to_string(), "00000000-0000-4000-8000-000000000000");
        assert_eq!(high_id.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn test_environment_before_cutoff_is_prod_without_a_draw() {
        let mut rng = SequenceSource::new([0.9]);

        assert_eq!(environment_for(&mut rng, 0, 3), Environment::Prod);
        assert_eq!(environment_for(&mut rng, 2, 3), Environment::Prod);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_environment_after_cutoff_draws_from_all() {
        let mut rng = SequenceSource::new([0.0, 0.3, 0.6, 0.9]);

        let drawn: Vec<Environment> = (0..4).map(|_| environment_for(&mut rng, 5, 3)).collect();

        assert_eq!(
            drawn,
            [
                Environment::Prod,
                Environment::Staging,
                Environment::Dev,
                Environment::Test,
            ]
        );
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_scripted_fleet_puts_tail_outside_prod() {
        // Every draw of 0.6 lands on dev for the tail environment.
        let mut rng = SequenceSource::new([0.6]);
        let spec = ProfileKind::Gaming.spec();
        let fleet = generate_fleet(&mut rng, &ProfileKind::Gaming, now());
        let cutoff = prod_cutoff(fleet.len());

        for table in &fleet {
            let index = name_index(table);
            let expected = if index <= cutoff {
                Environment::Prod
            } else {
                Environment::Dev
            };
            assert_eq!(table.environment, expected, "{}", table.table_name);
            assert_eq!(
                table.table_name,
                table_name(spec.prefix_for(index - 1), expected, index)
            );
        }
    }

    #[test]
    fn test_tail_positions_include_non_prod() {
        for seed in 0..10 {
            let mut rng = RngSource::seeded(seed);
            for kind in ProfileKind::KNOWN
                .iter()
                .cloned()
                .chain([ProfileKind::parse("misc")])
            {
                let fleet = generate_fleet(&mut rng, &kind, now());
                let cutoff = prod_cutoff(fleet.len());

                let tail: Vec<&TableRecord> =
                    fleet.iter().filter(|t| name_index(t) > cutoff).collect();
                assert_eq!(tail.len(), fleet.len() - cutoff);
                assert!(
                    tail.iter().any(|t| t.environment != Environment::Prod),
                    "seed {seed}, profile {kind}"
                );
            }
        }
    }
}
