//! Axum route handlers for the interview core API.
//!
//! Every endpoint is stateless: follow-up counts and clocks arrive in the
//! request and updated values go back in the response for the caller to
//! persist.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::decision::{decide_next_action, DecisionResult};
use crate::interview::evaluator::evaluate_answer;
use crate::interview::followup::{generate_followup, FollowupContext};
use crate::interview::interruption::{
    should_interrupt, InterruptCheck, DEFAULT_MAX_ANSWER_WORDS,
};
use crate::interview::verdict::{AnswerVerdict, FollowupKind};
use crate::rounds::RoundKind;
use crate::state::AppState;

/// Default session clock when the caller does not send one (5 minutes).
const DEFAULT_TIME_REMAINING_SECS: i64 = 300;

fn default_time_remaining() -> i64 {
    DEFAULT_TIME_REMAINING_SECS
}

fn default_max_words() -> usize {
    DEFAULT_MAX_ANSWER_WORDS
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub question: String,
    /// May be empty — an empty answer is scored as very poor, not rejected.
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub round_type: String,
    #[serde(default)]
    pub followup_count: u8,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub verdict: AnswerVerdict,
}

#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub round_type: String,
    #[serde(default)]
    pub followup_count: u8,
    #[serde(default = "default_time_remaining")]
    pub time_remaining_secs: i64,
}

#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    pub question: String,
    pub answer: String,
    pub followup_type: String,
    #[serde(default)]
    pub round_type: String,
    #[serde(default)]
    pub context: FollowupContext,
}

#[derive(Debug, Serialize)]
pub struct FollowupResponse {
    pub followup_question: String,
    pub followup_type: FollowupKind,
}

#[derive(Debug, Deserialize)]
pub struct InterruptCheckRequest {
    #[serde(default)]
    pub answer_so_far: String,
    pub time_remaining_secs: i64,
    #[serde(default = "default_max_words")]
    pub max_word_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/evaluate
///
/// Scores one question/answer pair. Total: judge failures degrade to the
/// fallback verdict, so this only errors on invalid input shape.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let round = RoundKind::parse(&request.round_type);
    let verdict = evaluate_answer(
        state.judge.as_ref(),
        &request.question,
        &request.answer,
        round,
        request.followup_count,
    )
    .await;

    Ok(Json(EvaluateResponse { verdict }))
}

/// POST /api/v1/interview/decide
///
/// Evaluates the answer and applies the flow rules: advance, follow up, or
/// interrupt. Returns the updated follow-up count for the caller to persist.
pub async fn handle_decide(
    State(state): State<AppState>,
    Json(request): Json<DecideRequest>,
) -> Result<Json<DecisionResult>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let round = RoundKind::parse(&request.round_type);
    let result = decide_next_action(
        state.judge.as_ref(),
        &request.question,
        &request.answer,
        round,
        request.followup_count,
        request.time_remaining_secs,
    )
    .await;

    info!(
        "Decision: {:?} ({}) at followup_count={}",
        result.action, result.reason, result.updated_followup_count
    );

    Ok(Json(result))
}

/// POST /api/v1/interview/followup
///
/// Drafts the follow-up question for a decision of action `followup`.
/// Unknown `followup_type` strings default to elaboration.
pub async fn handle_followup(
    State(state): State<AppState>,
    Json(request): Json<FollowupRequest>,
) -> Result<Json<FollowupResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let kind = FollowupKind::parse(&request.followup_type);
    let round = RoundKind::parse(&request.round_type);
    let followup_question = generate_followup(
        state.judge.as_ref(),
        &request.question,
        &request.answer,
        kind,
        round,
        &request.context,
    )
    .await;

    Ok(Json(FollowupResponse {
        followup_question,
        followup_type: kind,
    }))
}

/// POST /api/v1/interview/interrupt-check
///
/// Pure check, callable mid-answer: no judge call, no state.
pub async fn handle_interrupt_check(
    Json(request): Json<InterruptCheckRequest>,
) -> Json<InterruptCheck> {
    Json(should_interrupt(
        &request.answer_so_far,
        request.time_remaining_secs,
        request.max_word_count,
    ))
}
