//! Assistant chat handler.
//!
//! Builds fleet context from the current snapshot, then makes one request to
//! the completion service. Failures never surface as HTTP errors.

use axum::{extract::State, Json};

use fleetwise_core::{
    assistant::{build_fleet_context, build_user_message, ChatReply, ChatRequest, SYSTEM_PROMPT},
    fleet::{compute_fleet_stats, generate_recommendations},
};

use crate::{assistant::answer, state::AppState};

/// Ask the assistant about the current fleet (POST /api/chat).
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatReply> {
    let context = {
        let fleet = state.fleet.read().await;
        let stats = compute_fleet_stats(&fleet.tables);
        let recommendations =
            generate_recommendations(&fleet.tables, state.config.chat_context_limit);
        build_fleet_context(&fleet.profile, &stats, &recommendations)
    };

    tracing::debug!(question_len = payload.message.len(), "Chat request");

    let user_message = build_user_message(&context, &payload.message);
    Json(answer(state.assistant.as_ref(), SYSTEM_PROMPT, &user_message).await)
}
