pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::questions::handlers as questions;
use crate::report::handlers as reports;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview core: evaluation and flow control
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handle_evaluate),
        )
        .route("/api/v1/interview/decide", post(interview::handle_decide))
        .route(
            "/api/v1/interview/followup",
            post(interview::handle_followup),
        )
        .route(
            "/api/v1/interview/interrupt-check",
            post(interview::handle_interrupt_check),
        )
        // Question generation
        .route(
            "/api/v1/questions/generate",
            post(questions::handle_generate_question),
        )
        // Reporting and analysis
        .route("/api/v1/reports/final", post(reports::handle_final_report))
        .route(
            "/api/v1/reports/round-analysis",
            post(reports::handle_round_analysis),
        )
        .route(
            "/api/v1/reports/overall-analysis",
            post(reports::handle_overall_analysis),
        )
        .with_state(state)
}
