//! Axum route handlers for the question-generation API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::questions::generator::{generate_question, GeneratedQuestion, QuestionRequest};
use crate::state::AppState;

/// POST /api/v1/questions/generate
///
/// Produces the next question for a round from caller-supplied context.
pub async fn handle_generate_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<GeneratedQuestion>, AppError> {
    if request.question_number == 0 {
        return Err(AppError::Validation(
            "question_number starts at 1".to_string(),
        ));
    }
    if request.max_questions == 0 {
        return Err(AppError::Validation(
            "max_questions must be at least 1".to_string(),
        ));
    }

    let generated = generate_question(state.judge.as_ref(), request).await?;
    info!(
        "Question generated for {} round ({} chars)",
        generated.round.label(),
        generated.question.len()
    );

    Ok(Json(generated))
}
