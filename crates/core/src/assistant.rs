//! Prompt building for the fleet cost assistant.
//!
//! The service forwards a user's question to an external text-completion
//! API together with a plain-text summary of the current fleet. Building that
//! summary is pure and lives here; sending it does not.

use serde::{Deserialize, Serialize};

use crate::fleet::{format_currency, FleetStats, Recommendation};

/// Instructions sent as the system message of every chat request.
pub const SYSTEM_PROMPT: &str = "You are a cost-optimization advisor for a fleet of \
key-value database tables. Answer using the fleet context provided. Be concrete: name \
tables, quote dollar amounts, and prefer the highest-savings actions first. If the \
context does not contain the answer, say so instead of guessing.";

/// Reply used whenever the completion service cannot be reached or answers
/// with something unusable.
pub const FALLBACK_REPLY: &str = "I couldn't reach the optimization assistant just now. \
The recommendations panel still lists the highest-savings actions for this fleet; \
please try your question again in a moment.";

/// A question from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The answer returned to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    /// True when `reply` is [`FALLBACK_REPLY`] rather than a model answer.
    pub fallback: bool,
}

impl ChatReply {
    pub fn answered(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            reply: FALLBACK_REPLY.to_string(),
            fallback: true,
        }
    }
}

/// Renders fleet stats and the top recommendations as prompt context.
pub fn build_fleet_context(
    profile: &str,
    stats: &FleetStats,
    recommendations: &[Recommendation],
) -> String {
    let mut context = format!(
        "Industry profile: {profile}\n\
         Tables: {} ({} critical)\n\
         Monthly spend: {}\n\
         Savings potential: {} ({}% of spend)\n\
         Average utilization: {}%\n\
         Unused GSIs: {}\n",
        stats.total_tables,
        stats.critical_tables,
        format_currency(stats.total_monthly_spend),
        format_currency(stats.total_savings_potential),
        stats.savings_percentage,
        stats.avg_utilization,
        stats.total_unused_gsis,
    );

    if recommendations.is_empty() {
        context.push_str("Top recommendations: none\n");
        return context;
    }

    context.push_str("Top recommendations:\n");
    for (rank, rec) in recommendations.iter().enumerate() {
        context.push_str(&format!(
            "{}. {} [{}] spend {}/mo, waste {:.2}: {} (saves {}/mo, {} priority)\n",
            rank + 1,
            rec.table_name,
            rec.environment.as_str(),
            format_currency(rec.monthly_spend),
            rec.waste_score,
            rec.primary_action.title,
            format_currency(rec.primary_action.estimated_savings),
            rec.primary_action.priority.as_str(),
        ));
    }

    context
}

/// Combines fleet context and the user's question into the user message.
pub fn build_user_message(context: &str, question: &str) -> String {
    format!(
        "Fleet context:\n{}\nQuestion: {}",
        context.trim_end(),
        question.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{Action, ActionType, Environment, Priority, Region};
    use uuid::Uuid;

    fn stats() -> FleetStats {
        FleetStats {
            total_tables: 70,
            total_monthly_spend: 48_200,
            total_savings_potential: 9_640,
            critical_tables: 6,
            avg_utilization: 54,
            total_unused_gsis: 21,
            savings_percentage: 20,
        }
    }

    fn recommendation() -> Recommendation {
        let action = Action {
            action_type: ActionType::RightSize,
            title: "Right-size provisioned capacity".to_string(),
            description: String::new(),
            estimated_savings: 450,
            priority: Priority::High,
            icon: "📉".to_string(),
        };
        Recommendation {
            table_id: Uuid::nil(),
            table_name: "orders-prod-004".to_string(),
            environment: Environment::Prod,
            region: Region::UsEast1,
            monthly_spend: 1000,
            waste_score: 0.89,
            total_savings: 900,
            all_actions: vec![action.clone()],
            primary_action: action,
        }
    }

    #[test]
    fn test_context_contains_fleet_totals() {
        let context = build_fleet_context("ecommerce", &stats(), &[]);

        assert!(context.contains("Industry profile: ecommerce"));
        assert!(context.contains("Tables: 70 (6 critical)"));
        assert!(context.contains("Monthly spend: $48.2k"));
        assert!(context.contains("Savings potential: $9.6k (20% of spend)"));
        assert!(context.contains("Top recommendations: none"));
    }

    #[test]
    fn test_context_lists_recommendations_in_order() {
        let context = build_fleet_context("gaming", &stats(), &[recommendation()]);

        assert!(context.contains(
            "1. orders-prod-004 [prod] spend $1.0k/mo, waste 0.89: \
             Right-size provisioned capacity (saves $450/mo, HIGH priority)"
        ));
    }

    #[test]
    fn test_user_message_layout() {
        let message = build_user_message("Tables: 3\n", "  what should I fix first? ");
        assert_eq!(
            message,
            "Fleet context:\nTables: 3\nQuestion: what should I fix first?"
        );
    }

    #[test]
    fn test_chat_reply_constructors() {
        assert!(!ChatReply::answered("ok").fallback);

        let fallback = ChatReply::fallback();
        assert!(fallback.fallback);
        assert_eq!(fallback.reply, FALLBACK_REPLY);
    }
}
