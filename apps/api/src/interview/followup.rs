//! Follow-up Generator — asks the judge for a short contextual follow-up
//! question of a given category.
//!
//! Total by contract: a judge failure, or output that tidies down to
//! nothing, returns a fixed per-category fallback question instead of an
//! error.

use serde::Deserialize;
use tracing::warn;

use crate::interview::prompts::{FOLLOWUP_PROMPT_TEMPLATE, FOLLOWUP_SYSTEM_TEMPLATE};
use crate::interview::verdict::FollowupKind;
use crate::llm_client::Judge;
use crate::rounds::{get_round_profile, RoundKind};

/// Judge temperature for follow-up drafting. Higher than evaluation: the
/// question should sound conversational, not templated.
const FOLLOWUP_TEMPERATURE: f32 = 0.7;

/// Labels models like to prepend despite instructions.
const STRIP_PREFIXES: &[&str] = &["follow-up:", "follow up:", "question:"];

/// How many resume skills to surface in the prompt.
const MAX_CONTEXT_SKILLS: usize = 3;

/// Optional caller-supplied context for follow-up drafting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FollowupContext {
    /// The candidate's key skills from resume analysis, if the caller has them.
    #[serde(default)]
    pub resume_skills: Vec<String>,
}

impl FollowupKind {
    /// The drafting instruction for this follow-up category.
    fn instruction(&self) -> &'static str {
        match self {
            FollowupKind::Elaboration => {
                "Ask them to expand on a specific point they mentioned. Go deeper into details."
            }
            FollowupKind::Clarification => {
                "Ask them to explain something that was unclear or vague. \
                 Be specific about what needs clarification."
            }
            FollowupKind::Redirect => {
                "Gently bring them back to the original topic. Reference what \
                 they said but steer toward the question."
            }
        }
    }

    /// The deterministic fallback question for this category.
    fn fallback_question(&self) -> &'static str {
        match self {
            FollowupKind::Elaboration => "Could you tell me more about that?",
            FollowupKind::Clarification => "Could you explain that in a different way?",
            FollowupKind::Redirect => {
                "Going back to my original question, what are your thoughts?"
            }
        }
    }
}

/// Generates a contextual follow-up question. Never fails.
pub async fn generate_followup(
    judge: &dyn Judge,
    original_question: &str,
    candidate_answer: &str,
    kind: FollowupKind,
    round: RoundKind,
    context: &FollowupContext,
) -> String {
    let profile = get_round_profile(round);
    let system = FOLLOWUP_SYSTEM_TEMPLATE
        .replace("{round_name}", profile.display_name)
        .replace("{type_instruction}", kind.instruction());

    let prompt = FOLLOWUP_PROMPT_TEMPLATE
        .replace("{question}", original_question)
        .replace("{answer}", candidate_answer)
        .replace("{followup_type}", kind.label())
        .replace("{context}", &context_block(context));

    match judge.complete(&system, &prompt, FOLLOWUP_TEMPERATURE).await {
        Ok(text) => {
            let tidied = tidy_followup(&text);
            if tidied.is_empty() {
                warn!("Judge returned empty follow-up, using fallback");
                kind.fallback_question().to_string()
            } else {
                tidied
            }
        }
        Err(e) => {
            warn!("Judge call failed during follow-up generation: {e}");
            kind.fallback_question().to_string()
        }
    }
}

fn context_block(context: &FollowupContext) -> String {
    if context.resume_skills.is_empty() {
        return "\n".to_string();
    }
    let skills: Vec<&str> = context
        .resume_skills
        .iter()
        .take(MAX_CONTEXT_SKILLS)
        .map(String::as_str)
        .collect();
    format!("\nCandidate's key skills: {}\n", skills.join(", "))
}

/// Trims whitespace and surrounding quotes, then strips any leading label
/// ("Follow-up:", "Question:") the model prepended.
fn tidy_followup(text: &str) -> String {
    let mut out = text.trim().trim_matches('"').trim_matches('\'').trim();
    for prefix in STRIP_PREFIXES {
        if out.len() >= prefix.len()
            && out.is_char_boundary(prefix.len())
            && out[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            out = out[prefix.len()..].trim_start();
            break;
        }
    }
    out.to_string()
}
