//! Turns scored tables into prioritized, explained actions.
//!
//! Every rule is evaluated independently, so one table can trigger several
//! actions. The primary action is picked afterwards by [`primary_action`].

use super::format::format_currency;
use super::scoring::{
    self, ON_DEMAND_SWITCH_SAVINGS, RIGHT_SIZE_RECOVERY, UNUSED_GSI_MONTHLY_COST,
};
use super::types::{Action, ActionType, Priority, Recommendation, TableRecord, TrafficPattern};

/// Utilization below which a provisioned table is worth right-sizing.
const RIGHT_SIZE_THRESHOLD_PERCENT: u8 = 30;
/// Utilization below which right-sizing becomes high priority.
const RIGHT_SIZE_URGENT_PERCENT: u8 = 15;
/// Read throughput above which steady tables are cache candidates.
const DAX_READ_THRESHOLD: u64 = 5000;
/// Share of spend a read cache is expected to offload.
const DAX_SAVINGS: f64 = 0.25;

/// Evaluates every rule against one table, in rule order.
pub fn evaluate_actions(table: &TableRecord) -> Vec<Action> {
    let mut actions = Vec::new();
    let spend = table.monthly_spend as f64;

    if scoring::is_spiky_provisioned(table.capacity_mode, table.traffic_pattern) {
        actions.push(Action {
            action_type: ActionType::SwitchToOndemand,
            title: "Switch to On-Demand".to_string(),
            description: format!(
                "{} runs spiky traffic on provisioned capacity. On-demand billing absorbs the \
                 peaks without paying for idle headroom between them.",
                table.table_name
            ),
            estimated_savings: scoring::whole_units(spend * ON_DEMAND_SWITCH_SAVINGS),
            priority: Priority::High,
            icon: "🔄".to_string(),
        });
    }

    if table.is_provisioned() && table.utilization_percent < RIGHT_SIZE_THRESHOLD_PERCENT {
        let priority = if table.utilization_percent < RIGHT_SIZE_URGENT_PERCENT {
            Priority::High
        } else {
            Priority::Medium
        };
        actions.push(Action {
            action_type: ActionType::RightSize,
            title: "Right-size provisioned capacity".to_string(),
            description: format!(
                "{} uses {}% of its {} RCU / {} WCU. Lower provisioned capacity toward observed \
                 usage or enable auto scaling.",
                table.table_name,
                table.utilization_percent,
                table.provisioned_rcu.unwrap_or_default(),
                table.provisioned_wcu.unwrap_or_default(),
            ),
            estimated_savings: scoring::whole_units(
                spend * (1.0 - table.utilization()) * RIGHT_SIZE_RECOVERY,
            ),
            priority,
            icon: "📉".to_string(),
        });
    }

    if !table.unused_gsis.is_empty() {
        let unused = table.unused_gsis.len();
        let priority = if unused >= 2 {
            Priority::High
        } else {
            Priority::Medium
        };
        actions.push(Action {
            action_type: ActionType::RemoveGsi,
            title: "Remove unused GSIs".to_string(),
            description: format!(
                "{} has {} index(es) with no recent queries: {}. Each one costs about {}/month \
                 in storage and replicated writes.",
                table.table_name,
                unused,
                table.unused_gsis.join(", "),
                format_currency(UNUSED_GSI_MONTHLY_COST),
            ),
            estimated_savings: unused as u64 * UNUSED_GSI_MONTHLY_COST,
            priority,
            icon: "🗑️".to_string(),
        });
    }

    if table.consumed_rcu > DAX_READ_THRESHOLD && table.traffic_pattern == TrafficPattern::Steady
    {
        actions.push(Action {
            action_type: ActionType::AddDax,
            title: "Add DAX caching".to_string(),
            description: format!(
                "{} serves {} reads/s with steady traffic. A read-through cache can absorb \
                 repeated reads and reduce consumed capacity.",
                table.table_name, table.consumed_rcu
            ),
            estimated_savings: scoring::whole_units(spend * DAX_SAVINGS),
            priority: Priority::Low,
            icon: "⚡".to_string(),
        });
    }

    actions
}

/// Highest-savings action; the earliest one wins ties.
pub fn primary_action(actions: &[Action]) -> Option<&Action> {
    actions.iter().reduce(|best, candidate| {
        if candidate.estimated_savings > best.estimated_savings {
            candidate
        } else {
            best
        }
    })
}

/// Builds the recommendation for one table, or `None` if no rule fires.
pub fn recommend(table: &TableRecord) -> Option<Recommendation> {
    let all_actions = evaluate_actions(table);
    let primary = primary_action(&all_actions)?.clone();

    Some(Recommendation {
        table_id: table.id,
        table_name: table.table_name.clone(),
        environment: table.environment,
        region: table.region,
        monthly_spend: table.monthly_spend,
        waste_score: table.waste_score,
        total_savings: table.savings_potential,
        all_actions,
        primary_action: primary,
    })
}

/// Recommendations for the `limit` tables with the highest savings potential.
///
/// Tables are selected first (stable, so ties keep input order) and then
/// filtered, so fewer than `limit` entries come back when some of the
/// selected tables trigger no action. Output keeps the selection order.
pub fn generate_recommendations(tables: &[TableRecord], limit: usize) -> Vec<Recommendation> {
    let mut selected: Vec<&TableRecord> = tables.iter().collect();
    selected.sort_by(|a, b| b.savings_potential.cmp(&a.savings_potential));

    selected
        .into_iter()
        .take(limit)
        .filter_map(recommend)
        .collect()
}
