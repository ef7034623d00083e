//! Pretty output formatting.

use fleetwise_core::{
    assistant::ChatReply,
    fleet::{
        format_currency, waste_category, FleetSnapshot, FleetStats, ProfileSummary, Recommendation,
        TableRecord,
    },
};

/// Format profiles for display.
pub fn format_profiles(profiles: &[ProfileSummary]) -> String {
    if profiles.is_empty() {
        return "No profiles found.".to_string();
    }
    let mut output = format!("PROFILES ({})\n", profiles.len());
    output.push_str(&"-".repeat(40));
    for profile in profiles {
        output.push_str(&format!(
            "\n{} ({} tables)\n  Prefixes: {}\n",
            profile.key,
            profile.table_count,
            profile.prefixes.join(", ")
        ));
    }
    output
}

/// Format a table for display.
pub fn format_table(table: &TableRecord) -> String {
    let capacity = match (table.provisioned_rcu, table.provisioned_wcu) {
        (Some(rcu), Some(wcu)) => format!(
            "{} (RCU {}/{}, WCU {}/{})",
            table.capacity_mode.as_str(),
            table.consumed_rcu,
            rcu,
            table.consumed_wcu,
            wcu
        ),
        _ => format!(
            "{} (RCU {}, WCU {})",
            table.capacity_mode.as_str(),
            table.consumed_rcu,
            table.consumed_wcu
        ),
    };

    let mut output = format!(
        "{} [{}, {}]\n  ID: {}\n  Capacity: {}\n  Utilization: {}%\n  Traffic: {}\n  GSIs: {}",
        table.table_name,
        table.environment.as_str(),
        table.region.as_str(),
        table.id,
        capacity,
        table.utilization_percent,
        table.traffic_pattern.as_str(),
        table.gsi_count
    );
    if !table.unused_gsis.is_empty() {
        output.push_str(&format!(" (unused: {})", table.unused_gsis.join(", ")));
    }
    output.push_str(&format!(
        "\n  Spend: {}/mo\n  Savings: {}/mo\n  Waste: {:.2} ({})",
        format_currency(table.monthly_spend),
        format_currency(table.savings_potential),
        table.waste_score,
        waste_category(table.waste_score).as_str()
    ));
    output
}

/// Format a fleet snapshot as one line per table.
pub fn format_fleet(snapshot: &FleetSnapshot) -> String {
    let mut output = format!(
        "FLEET {} ({} tables, generated {})\n",
        snapshot.profile,
        snapshot.tables.len(),
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    output.push_str(&"-".repeat(40));
    if snapshot.tables.is_empty() {
        output.push_str("\nNo tables.");
        return output;
    }
    for table in &snapshot.tables {
        output.push_str(&format!(
            "\n{:.2} {:<8} {:>8}  {}",
            table.waste_score,
            waste_category(table.waste_score).as_str(),
            format_currency(table.monthly_spend),
            table.table_name
        ));
    }
    output
}

/// Format fleet stats for display.
pub fn format_stats(stats: &FleetStats) -> String {
    format!(
        "FLEET STATS\n{}\n  Tables: {} ({} critical)\n  Monthly spend: {}\n  \
         Savings potential: {} ({}%)\n  Average utilization: {}%\n  Unused GSIs: {}",
        "-".repeat(40),
        stats.total_tables,
        stats.critical_tables,
        format_currency(stats.total_monthly_spend),
        format_currency(stats.total_savings_potential),
        stats.savings_percentage,
        stats.avg_utilization,
        stats.total_unused_gsis
    )
}

/// Format a recommendation with all of its actions; the primary is starred.
pub fn format_recommendation(rec: &Recommendation) -> String {
    let mut output = format!(
        "{} [{}, {}] spend {}/mo, waste {:.2} ({}), saves up to {}/mo",
        rec.table_name,
        rec.environment.as_str(),
        rec.region.as_str(),
        format_currency(rec.monthly_spend),
        rec.waste_score,
        waste_category(rec.waste_score).as_str(),
        format_currency(rec.total_savings)
    );
    for action in &rec.all_actions {
        let marker = if action == &rec.primary_action {
            '*'
        } else {
            ' '
        };
        output.push_str(&format!(
            "\n {} {} {} ({}, {}/mo)",
            marker,
            action.icon,
            action.title,
            action.priority.as_str(),
            format_currency(action.estimated_savings)
        ));
    }
    output
}

/// Format recommendations for display.
pub fn format_recommendations(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return "No recommendations.".to_string();
    }
    let mut output = format!("RECOMMENDATIONS ({})\n", recs.len());
    output.push_str(&"-".repeat(40));
    for rec in recs {
        output.push_str(&format!("\n{}", format_recommendation(rec)));
        output.push('\n');
    }
    output
}

/// Format an assistant reply.
pub fn format_chat_reply(reply: &ChatReply) -> String {
    if reply.fallback {
        format!("{}\n(assistant unavailable)", reply.reply)
    } else {
        reply.reply.clone()
    }
}
