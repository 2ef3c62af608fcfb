//! Axum route handlers for reporting and analysis.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::questions::generator::{CandidateInfo, ResumeAnalysis};
use crate::report::round_analysis::{
    analyze_interview, analyze_round, HiringCall, OverallAnalysis, RoundAnalysis,
};
use crate::report::synthesis::{generate_final_report, FinalReport, RoundsTranscript};
use crate::rounds::RoundKind;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FinalReportRequest {
    #[serde(default)]
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub resume_analysis: ResumeAnalysis,
    pub rounds_qa: RoundsTranscript,
}

#[derive(Debug, Serialize)]
pub struct FinalReportResponse {
    pub report: FinalReport,
    /// Stamped by the service, not the judge.
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RoundAnalysisRequest {
    pub round_type: String,
    pub round_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct OverallAnalysisRequest {
    #[serde(default)]
    pub rounds: Vec<RoundAnalysis>,
    pub overall_score: u32,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Serialize)]
pub struct OverallAnalysisResponse {
    pub overall_analysis: OverallAnalysis,
    pub hiring_recommendation: HiringCall,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports/final
///
/// LLM-written hiring report over the full transcript.
pub async fn handle_final_report(
    State(state): State<AppState>,
    Json(request): Json<FinalReportRequest>,
) -> Result<Json<FinalReportResponse>, AppError> {
    if request.rounds_qa.is_empty() {
        return Err(AppError::Validation(
            "rounds_qa cannot be empty".to_string(),
        ));
    }

    let report = generate_final_report(
        state.judge.as_ref(),
        &request.candidate,
        &request.resume_analysis,
        &request.rounds_qa,
    )
    .await?;

    Ok(Json(FinalReportResponse {
        report,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/reports/round-analysis
///
/// Deterministic rule-based analysis of a single round. No judge call.
pub async fn handle_round_analysis(
    Json(request): Json<RoundAnalysisRequest>,
) -> Result<Json<RoundAnalysis>, AppError> {
    if request.round_score > 100 {
        return Err(AppError::Validation(
            "round_score must be in 0-100".to_string(),
        ));
    }

    let round = RoundKind::parse(&request.round_type);
    Ok(Json(analyze_round(round, request.round_score)))
}

/// POST /api/v1/reports/overall-analysis
///
/// Aggregates per-round analyses into an overall picture and a hiring call.
pub async fn handle_overall_analysis(
    Json(request): Json<OverallAnalysisRequest>,
) -> Result<Json<OverallAnalysisResponse>, AppError> {
    if request.overall_score > 100 {
        return Err(AppError::Validation(
            "overall_score must be in 0-100".to_string(),
        ));
    }

    let (overall_analysis, hiring_recommendation) = analyze_interview(
        &request.rounds,
        request.overall_score,
        &request.position,
    );

    Ok(Json(OverallAnalysisResponse {
        overall_analysis,
        hiring_recommendation,
    }))
}
