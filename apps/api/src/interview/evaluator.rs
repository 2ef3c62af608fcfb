//! Quality Evaluator — sends a question/answer pair to the judge and
//! normalizes its verdict.
//!
//! Total by contract: this function never returns an error. A blank answer
//! is scored deterministically without a judge call; a judge failure or an
//! unparseable payload yields `AnswerVerdict::fallback`. The follow-up cap
//! is re-enforced here regardless of what the judge returns.

use tracing::warn;

use crate::interview::decision::MAX_FOLLOWUPS;
use crate::interview::prompts::{EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM_TEMPLATE};
use crate::interview::verdict::{AnswerVerdict, FollowupHint, RawVerdict};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, LENIENT_SCORING_INSTRUCTION};
use crate::llm_client::{extract_json_object, strip_json_fences, Judge};
use crate::rounds::{get_round_profile, RoundKind};

/// Judge temperature for evaluation. Low: scoring should be stable, not creative.
const EVALUATION_TEMPERATURE: f32 = 0.3;

/// Evaluates one answer and returns a verdict. Never fails.
pub async fn evaluate_answer(
    judge: &dyn Judge,
    question: &str,
    answer: &str,
    round: RoundKind,
    followup_count: u8,
) -> AnswerVerdict {
    let mut verdict = if answer.trim().is_empty() {
        AnswerVerdict::empty_answer()
    } else {
        judged_verdict(judge, question, answer, round, followup_count).await
    };

    // Hard cap, enforced unconditionally: once two follow-ups have been
    // asked the judge may not request a third, whatever it returned.
    if followup_count >= MAX_FOLLOWUPS {
        verdict.needs_followup = false;
        verdict.followup_type_hint = FollowupHint::None;
        verdict.reason = format!(
            "Maximum follow-ups reached ({MAX_FOLLOWUPS}/{MAX_FOLLOWUPS}). Moving to the next question."
        );
    }

    verdict
}

async fn judged_verdict(
    judge: &dyn Judge,
    question: &str,
    answer: &str,
    round: RoundKind,
    followup_count: u8,
) -> AnswerVerdict {
    let profile = get_round_profile(round);
    let system = EVALUATION_SYSTEM_TEMPLATE
        .replace("{lenient_scoring}", LENIENT_SCORING_INSTRUCTION)
        .replace("{round_context}", profile.judge_context)
        .replace("{json_only}", JSON_ONLY_SYSTEM);
    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{answer}", answer)
        .replace("{round_type}", round.label())
        .replace("{followup_count}", &followup_count.to_string())
        .replace("{max_followups}", &MAX_FOLLOWUPS.to_string());

    match judge.complete(&system, &prompt, EVALUATION_TEMPERATURE).await {
        Ok(text) => parse_verdict(&text).unwrap_or_else(|| {
            warn!("Judge returned unparseable verdict, using fallback");
            AnswerVerdict::fallback("judge output could not be parsed")
        }),
        Err(e) => {
            warn!("Judge call failed during evaluation: {e}");
            AnswerVerdict::fallback(format!("judge unavailable: {e}"))
        }
    }
}

/// Defensive parse of judge output: tolerate code fences and surrounding
/// prose, require one JSON object, default every missing field, clamp ranges.
fn parse_verdict(text: &str) -> Option<AnswerVerdict> {
    let stripped = strip_json_fences(text);
    let object = extract_json_object(stripped)?;
    let raw: RawVerdict = serde_json::from_str(object).ok()?;
    Some(raw.normalize())
}
