//! Question generation — produces the next interview question for a round.
//!
//! Stateless: the caller supplies all context (resume analysis, prior Q&A,
//! job description) with every request. The first screening question is a
//! deterministic personalized greeting; everything else goes through the
//! judge at the round profile's temperature.
//!
//! Unlike the interview core, this is NOT total: a judge failure surfaces
//! as an error, because serving a fabricated question is worse than letting
//! the caller retry.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{extract_json_object, strip_json_fences, Judge};
use crate::questions::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM_TEMPLATE};
use crate::rounds::{get_round_profile, RoundKind};

const MAX_BACKGROUND_SKILLS: usize = 8;
const MAX_BACKGROUND_PROJECTS: usize = 3;
/// Only the most recent answers are quoted back into the prompt.
const MAX_RECENT_ANSWERS: usize = 2;
const ANSWER_SNIPPET_CHARS: usize = 200;
const JD_SNIPPET_CHARS: usize = 400;

/// Coding problem difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodingDifficulty {
    Easy,
    Moderate,
    Hard,
}

impl CodingDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            CodingDifficulty::Easy => "easy",
            CodingDifficulty::Moderate => "moderate",
            CodingDifficulty::Hard => "hard",
        }
    }
}

/// Company profile, used only to pick a default coding difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    #[default]
    Startup,
    ServiceBased,
    ProductBased,
}

impl CompanyType {
    /// Default difficulty when the caller does not pin one.
    pub fn default_difficulty(&self) -> CodingDifficulty {
        match self {
            CompanyType::ProductBased => CodingDifficulty::Hard,
            CompanyType::ServiceBased => CodingDifficulty::Moderate,
            CompanyType::Startup => CodingDifficulty::Easy,
        }
    }
}

/// Resume analysis supplied by the caller (extraction happens upstream).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub extracted_skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub experience: String,
}

/// One prior question/answer exchange from the session history.
#[derive(Debug, Clone, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub round_type: String,
    pub question_number: u32,
    pub max_questions: u32,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_analysis: ResumeAnalysis,
    #[serde(default)]
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub previous_qa: Vec<QaPair>,
    #[serde(default)]
    pub coding_difficulty: Option<CodingDifficulty>,
    #[serde(default)]
    pub company_type: CompanyType,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuestion {
    /// Fresh id the caller can use to key the question in its own store.
    pub question_id: Uuid,
    pub round: RoundKind,
    pub question: String,
    pub question_number: u32,
    pub max_questions: u32,
}

/// Generates the next question for a round.
pub async fn generate_question(
    judge: &dyn Judge,
    request: QuestionRequest,
) -> Result<GeneratedQuestion, AppError> {
    let round = RoundKind::parse(&request.round_type);
    let profile = get_round_profile(round);

    info!(
        "Generating {} question {}/{}",
        round.label(),
        request.question_number,
        request.max_questions
    );

    // The screening opener is always a personalized greeting — no judge call.
    if round == RoundKind::Screening && request.question_number == 1 {
        return Ok(finish(round, &request, greeting(&request.candidate)));
    }

    let system = QUESTION_SYSTEM_TEMPLATE.replace("{round_style}", profile.question_style);
    let prompt = QUESTION_PROMPT_TEMPLATE
        .replace("{question_number}", &request.question_number.to_string())
        .replace("{max_questions}", &request.max_questions.to_string())
        .replace("{job_description}", &jd_snippet(&request.job_description))
        .replace("{background}", &background_block(&request))
        .replace("{previous_answers}", &conversation_block(&request.previous_qa))
        .replace("{extra_guidance}", &extra_guidance(round, &request));

    let text = judge
        .complete(&system, &prompt, profile.question_temperature)
        .await
        .map_err(|e| AppError::Llm(format!("question generation failed: {e}")))?;

    let question = parse_question_text(&text)
        .ok_or_else(|| AppError::Llm("judge returned an empty question".to_string()))?;

    Ok(finish(round, &request, question))
}

fn finish(round: RoundKind, request: &QuestionRequest, question: String) -> GeneratedQuestion {
    GeneratedQuestion {
        question_id: Uuid::new_v4(),
        round,
        question,
        question_number: request.question_number,
        max_questions: request.max_questions,
    }
}

/// Deterministic opener for the screening round.
fn greeting(candidate: &CandidateInfo) -> String {
    let first_name = candidate
        .name
        .split_whitespace()
        .next()
        .unwrap_or("there");
    let position = if candidate.position.trim().is_empty() {
        "this role"
    } else {
        candidate.position.trim()
    };
    format!(
        "Hello {first_name}! Thank you for joining us today for the {position} interview. \
         Could you please introduce yourself and tell me a bit about your background?"
    )
}

fn jd_snippet(job_description: &str) -> String {
    if job_description.trim().is_empty() {
        return "General role".to_string();
    }
    truncate_chars(job_description.trim(), JD_SNIPPET_CHARS)
}

fn background_block(request: &QuestionRequest) -> String {
    let analysis = &request.resume_analysis;
    let skills: Vec<&str> = analysis
        .extracted_skills
        .iter()
        .take(MAX_BACKGROUND_SKILLS)
        .map(String::as_str)
        .collect();
    let projects: Vec<&str> = analysis
        .projects
        .iter()
        .take(MAX_BACKGROUND_PROJECTS)
        .map(String::as_str)
        .collect();

    let tech_stack = if skills.is_empty() {
        "various technologies".to_string()
    } else {
        skills.join(", ")
    };
    let project_names = if projects.is_empty() {
        "their projects".to_string()
    } else {
        projects.join(", ")
    };
    let experience = if request.candidate.experience.trim().is_empty() {
        "Not specified"
    } else {
        request.candidate.experience.trim()
    };

    format!(
        "- Experience: {experience}\n- Tech stack: {tech_stack}\n- Key projects: {project_names}"
    )
}

fn conversation_block(previous_qa: &[QaPair]) -> String {
    if previous_qa.is_empty() {
        return "This is the first question.".to_string();
    }
    let start = previous_qa.len().saturating_sub(MAX_RECENT_ANSWERS);
    previous_qa[start..]
        .iter()
        .enumerate()
        .map(|(i, qa)| {
            format!(
                "Previous answer {}: {}",
                i + 1,
                truncate_chars(&qa.answer, ANSWER_SNIPPET_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn extra_guidance(round: RoundKind, request: &QuestionRequest) -> String {
    if round != RoundKind::Coding {
        return "\n".to_string();
    }
    let difficulty = request
        .coding_difficulty
        .unwrap_or_else(|| request.company_type.default_difficulty());
    format!(
        "\nPose ONE {} coding problem with clear constraints and an example.\n",
        difficulty.label()
    )
}

/// Defensive parse of `{"question": "..."}`; falls back to the raw text
/// with JSON punctuation scrubbed, mirroring how models sometimes answer
/// in plain prose despite instructions. Returns None if nothing usable.
fn parse_question_text(text: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct RawQuestion {
        #[serde(default)]
        question: String,
    }

    let stripped = strip_json_fences(text);
    if let Some(object) = extract_json_object(stripped) {
        if let Ok(raw) = serde_json::from_str::<RawQuestion>(object) {
            // Valid JSON is authoritative — an empty question in it is a
            // judge failure, not prose to scrub.
            let question = raw.question.trim();
            return if question.is_empty() {
                None
            } else {
                Some(question.to_string())
            };
        }
    }

    let cleaned: String = stripped
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '"'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Truncates on a char boundary; ASCII-safe and cheap for prompt snippets.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}
