//! Final-report synthesis — asks the judge for a structured hiring report
//! over the full interview transcript.
//!
//! NOT total: the report is the product of the whole interview, so a judge
//! failure surfaces as an error rather than a fabricated assessment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::verdict::AnswerQuality;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{call_json, Judge};
use crate::questions::generator::{truncate_chars, CandidateInfo, ResumeAnalysis};
use crate::report::prompts::{REPORT_PROMPT_TEMPLATE, REPORT_SYSTEM};

/// Judge temperature for report writing: some narrative freedom, stable scores.
const REPORT_TEMPERATURE: f32 = 0.5;

/// Answers are quoted into the transcript at most this long.
const TRANSCRIPT_ANSWER_CHARS: usize = 300;

const MAX_RESUME_SKILLS: usize = 10;
const MAX_RESUME_STRENGTHS: usize = 5;

/// One answered question as the caller recorded it.
#[derive(Debug, Clone, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    /// Quality band from the evaluation at answer time, if the caller kept it.
    #[serde(default)]
    pub overall_quality: Option<AnswerQuality>,
}

/// Q&A history per round name, as supplied by the caller's store.
pub type RoundsTranscript = BTreeMap<String, Vec<QaRecord>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: String,
    pub score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub key_observations: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub skill: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub evidence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportDecision {
    StrongHire,
    Hire,
    Maybe,
    NoHire,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiringRecommendation {
    pub decision: ReportDecision,
    pub confidence: u32,
    pub reasoning: String,
}

/// The full hiring report as returned by the judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub overall_score: u32,
    pub overall_feedback: String,
    #[serde(default)]
    pub round_analysis: Vec<RoundReport>,
    #[serde(default)]
    pub skill_assessment: Vec<SkillAssessment>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements_needed: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub hiring_recommendation: HiringRecommendation,
}

/// Generates the final hiring report over the whole interview.
pub async fn generate_final_report(
    judge: &dyn Judge,
    candidate: &CandidateInfo,
    resume: &ResumeAnalysis,
    rounds_qa: &RoundsTranscript,
) -> Result<FinalReport, AppError> {
    let total_questions: usize = rounds_qa.values().map(Vec::len).sum();
    info!(
        "Generating final report: {} rounds, {} Q&A pairs",
        rounds_qa.len(),
        total_questions
    );

    let system = REPORT_SYSTEM.replace("{json_only}", JSON_ONLY_SYSTEM);
    let prompt = REPORT_PROMPT_TEMPLATE
        .replace("{candidate}", &candidate_block(candidate))
        .replace("{resume}", &resume_block(resume))
        .replace("{transcript}", &transcript_block(rounds_qa));

    let mut report: FinalReport = call_json(judge, &system, &prompt, REPORT_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("report generation failed: {e}")))?;

    // The judge's numbers are not trusted past the schema: clamp to range.
    report.overall_score = report.overall_score.min(100);
    report.hiring_recommendation.confidence = report.hiring_recommendation.confidence.min(100);
    for round in &mut report.round_analysis {
        round.score = round.score.min(100);
    }

    info!("Final report generated: score {}/100", report.overall_score);
    Ok(report)
}

fn candidate_block(candidate: &CandidateInfo) -> String {
    let name = if candidate.name.trim().is_empty() {
        "Unknown"
    } else {
        candidate.name.trim()
    };
    let experience = if candidate.experience.trim().is_empty() {
        "Not specified"
    } else {
        candidate.experience.trim()
    };
    let position = if candidate.position.trim().is_empty() {
        "Not specified"
    } else {
        candidate.position.trim()
    };
    format!("- Name: {name}\n- Experience: {experience}\n- Target role: {position}")
}

fn resume_block(resume: &ResumeAnalysis) -> String {
    let skills: Vec<&str> = resume
        .extracted_skills
        .iter()
        .take(MAX_RESUME_SKILLS)
        .map(String::as_str)
        .collect();
    let strengths: Vec<&str> = resume
        .strengths
        .iter()
        .take(MAX_RESUME_STRENGTHS)
        .map(String::as_str)
        .collect();
    let level = if resume.experience_level.trim().is_empty() {
        "Not specified"
    } else {
        resume.experience_level.trim()
    };
    format!(
        "- Skills: {}\n- Experience level: {level}\n- Strengths: {}",
        skills.join(", "),
        strengths.join(", ")
    )
}

/// Formats the round-keyed Q&A history into a plain-text transcript, with
/// answers truncated so one rambling answer cannot crowd out the rest.
fn transcript_block(rounds_qa: &RoundsTranscript) -> String {
    let mut out = String::new();
    for (round_name, qa_list) in rounds_qa {
        let heading = round_name.to_uppercase().replace('_', " ");
        out.push_str(&format!("\n=== {heading} ROUND ===\n"));
        for (i, qa) in qa_list.iter().enumerate() {
            let n = i + 1;
            out.push_str(&format!("\nQ{n}: {}", qa.question));
            out.push_str(&format!(
                "\nA{n}: {}",
                truncate_chars(&qa.answer, TRANSCRIPT_ANSWER_CHARS)
            ));
            if let Some(quality) = qa.overall_quality {
                out.push_str(&format!("\nScore: {}", quality.label()));
            }
            out.push('\n');
        }
    }
    out
}
