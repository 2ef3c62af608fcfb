//! Flow Decision Engine — turns a verdict plus session counters into the
//! next interview action.
//!
//! The rule table in `resolve` runs in a fixed priority order; first match
//! wins. The ordering is the core contract of this module and must not be
//! rearranged: the cap preempts everything, incoherence outranks topic
//! drift, and the completeness thresholds tighten per follow-up round
//! (30 then 25) so escalation terminates within two follow-ups per question.
//!
//! `resolve` is a pure function of its inputs; the only async work is the
//! single evaluator call, which is itself total. No shared state, safe to
//! invoke concurrently across sessions.

use serde::Serialize;

use crate::interview::evaluator::evaluate_answer;
use crate::interview::verdict::{AnswerVerdict, FollowupKind};
use crate::llm_client::Judge;
use crate::rounds::RoundKind;

/// Hard cap on follow-ups per question.
pub const MAX_FOLLOWUPS: u8 = 2;
/// Rule 2: interrupt when rambling AND coherence is below this.
pub const RAMBLING_COHERENCE_CEILING: u8 = 40;
/// Rule 3: redirect when off-track AND relevance is below this.
pub const OFF_TRACK_RELEVANCE_CEILING: u8 = 30;
/// Rule 4: first follow-up fires below this completeness.
pub const FIRST_FOLLOWUP_COMPLETENESS: u8 = 30;
/// Rule 5: second follow-up fires below this completeness (stricter).
pub const SECOND_FOLLOWUP_COMPLETENESS: u8 = 25;
/// Rules 6 and the interruption monitor: "time pressure" threshold.
pub const TIME_PRESSURE_SECS: i64 = 30;
/// Rule 6: under time pressure, answers at or above this completeness still advance normally.
pub const TIME_PRESSURE_COMPLETENESS: u8 = 60;

/// What the interview should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewAction {
    NextQuestion,
    Followup,
    Interrupt,
}

/// Output of one Decision Engine invocation. Immutable; the verdict is
/// carried through for auditing and report synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResult {
    pub action: InterviewAction,
    /// Fixed rule identifier, e.g. "followup_limit_reached" or "good_answer".
    pub reason: String,
    /// Candidate-facing text.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_type: Option<FollowupKind>,
    /// New follow-up count for the caller to persist. Never exceeds 2.
    pub updated_followup_count: u8,
    pub verdict: AnswerVerdict,
}

/// Evaluates the answer, then applies the rule table.
pub async fn decide_next_action(
    judge: &dyn Judge,
    question: &str,
    answer: &str,
    round: RoundKind,
    followup_count: u8,
    time_remaining_secs: i64,
) -> DecisionResult {
    let verdict = evaluate_answer(judge, question, answer, round, followup_count).await;
    resolve(verdict, followup_count, time_remaining_secs)
}

/// The ordered rule table. Pure: no judge call, no I/O.
pub fn resolve(
    verdict: AnswerVerdict,
    followup_count: u8,
    time_remaining_secs: i64,
) -> DecisionResult {
    // RULE 1: hard cap. A count above the cap is a caller bug; treat it as
    // at-cap and echo it back clamped so the invariant holds downstream.
    if followup_count >= MAX_FOLLOWUPS {
        return DecisionResult {
            action: InterviewAction::NextQuestion,
            reason: "followup_limit_reached".to_string(),
            message: "Thank you. Let's move to the next question.".to_string(),
            followup_type: None,
            updated_followup_count: followup_count.min(MAX_FOLLOWUPS),
            verdict,
        };
    }

    // RULE 2: rambling. Checked before off-track: incoherence is the more
    // severe failure mode.
    if verdict.is_rambling && verdict.coherence < RAMBLING_COHERENCE_CEILING {
        return DecisionResult {
            action: InterviewAction::Interrupt,
            reason: "rambling".to_string(),
            message: "I see. Let me ask more specifically...".to_string(),
            followup_type: None,
            updated_followup_count: followup_count,
            verdict,
        };
    }

    // RULE 3: off-track — redirect back to the question.
    if verdict.is_off_track && verdict.relevance < OFF_TRACK_RELEVANCE_CEILING {
        return DecisionResult {
            action: InterviewAction::Followup,
            reason: "off_track".to_string(),
            message: "That's interesting, but let me refocus...".to_string(),
            followup_type: Some(FollowupKind::Redirect),
            updated_followup_count: followup_count + 1,
            verdict,
        };
    }

    // RULE 4: first follow-up, only for very poor answers.
    if followup_count == 0 && verdict.completeness < FIRST_FOLLOWUP_COMPLETENESS {
        return DecisionResult {
            action: InterviewAction::Followup,
            reason: "poor_answer".to_string(),
            message: "Can you elaborate on that?".to_string(),
            followup_type: Some(FollowupKind::Elaboration),
            updated_followup_count: 1,
            verdict,
        };
    }

    // RULE 5: second follow-up, only for extremely incomplete answers.
    if followup_count == 1 && verdict.completeness < SECOND_FOLLOWUP_COMPLETENESS {
        return DecisionResult {
            action: InterviewAction::Followup,
            reason: "still_incomplete".to_string(),
            message: "One more thing - can you clarify that?".to_string(),
            followup_type: Some(FollowupKind::Clarification),
            updated_followup_count: 2,
            verdict,
        };
    }

    // RULE 6: time pressure — a merely-okay answer is not worth the clock.
    if time_remaining_secs < TIME_PRESSURE_SECS
        && verdict.completeness < TIME_PRESSURE_COMPLETENESS
    {
        return DecisionResult {
            action: InterviewAction::NextQuestion,
            reason: "time_constraint".to_string(),
            message: "We're running short on time. Let's continue...".to_string(),
            followup_type: None,
            updated_followup_count: followup_count,
            verdict,
        };
    }

    // DEFAULT: advance, labeled by the verdict's quality band.
    let reason = format!("{}_answer", verdict.overall_quality.label());
    let message = verdict.feedback.clone();
    DecisionResult {
        action: InterviewAction::NextQuestion,
        reason,
        message,
        followup_type: None,
        updated_followup_count: followup_count,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::verdict::AnswerQuality;

    /// A comfortably passing verdict; individual tests override fields.
    fn decent_verdict() -> AnswerVerdict {
        let mut v = AnswerVerdict::fallback("test");
        v.clarity = 70;
        v.completeness = 70;
        v.relevance = 80;
        v.depth = 65;
        v.coherence = 75;
        v.overall_quality = AnswerQuality::Good;
        v.feedback = "Good answer!".to_string();
        v
    }

    #[test]
    fn test_cap_reached_always_advances() {
        let mut v = decent_verdict();
        // Even a verdict screaming for follow-up cannot beat the cap.
        v.completeness = 0;
        v.is_off_track = true;
        v.relevance = 0;
        let result = resolve(v, 2, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);
        assert_eq!(result.reason, "followup_limit_reached");
        assert_eq!(result.updated_followup_count, 2);
    }

    #[test]
    fn test_count_above_cap_is_treated_as_at_cap() {
        let result = resolve(decent_verdict(), 5, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);
        assert_eq!(result.reason, "followup_limit_reached");
        // Echoed count is clamped, keeping the [0,2] invariant.
        assert_eq!(result.updated_followup_count, 2);
    }

    #[test]
    fn test_rambling_interrupts() {
        let mut v = decent_verdict();
        v.is_rambling = true;
        v.coherence = 10;
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::Interrupt);
        assert_eq!(result.reason, "rambling");
        assert_eq!(result.updated_followup_count, 0);
    }

    #[test]
    fn test_rambling_flag_without_low_coherence_does_not_interrupt() {
        let mut v = decent_verdict();
        v.is_rambling = true;
        v.coherence = 40; // at the ceiling, not below
        let result = resolve(v, 0, 300);
        assert_ne!(result.action, InterviewAction::Interrupt);
    }

    /// Priority contract: rule 2 precedes rule 3 — a verdict that is both
    /// rambling and off-track interrupts, it does not redirect.
    #[test]
    fn test_rambling_takes_priority_over_off_track() {
        let mut v = decent_verdict();
        v.is_rambling = true;
        v.coherence = 10;
        v.is_off_track = true;
        v.relevance = 10;
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::Interrupt);
        assert_eq!(result.reason, "rambling");
    }

    #[test]
    fn test_off_track_redirects_and_increments() {
        let mut v = decent_verdict();
        v.is_off_track = true;
        v.relevance = 20;
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::Followup);
        assert_eq!(result.reason, "off_track");
        assert_eq!(result.followup_type, Some(FollowupKind::Redirect));
        assert_eq!(result.updated_followup_count, 1);
    }

    #[test]
    fn test_off_track_flag_with_decent_relevance_is_ignored() {
        let mut v = decent_verdict();
        v.is_off_track = true;
        v.relevance = 30; // at the ceiling, not below
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);
    }

    #[test]
    fn test_first_followup_on_very_poor_completeness() {
        let mut v = decent_verdict();
        v.completeness = 29;
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::Followup);
        assert_eq!(result.reason, "poor_answer");
        assert_eq!(result.followup_type, Some(FollowupKind::Elaboration));
        assert_eq!(result.updated_followup_count, 1);
    }

    #[test]
    fn test_first_followup_boundary_is_strict() {
        let mut v = decent_verdict();
        v.completeness = 30;
        let result = resolve(v, 0, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);
    }

    #[test]
    fn test_second_followup_threshold_tightens() {
        // 26 would have triggered the first follow-up, but not the second.
        let mut v = decent_verdict();
        v.completeness = 26;
        let result = resolve(v, 1, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);

        let mut v = decent_verdict();
        v.completeness = 24;
        let result = resolve(v, 1, 300);
        assert_eq!(result.action, InterviewAction::Followup);
        assert_eq!(result.reason, "still_incomplete");
        assert_eq!(result.followup_type, Some(FollowupKind::Clarification));
        assert_eq!(result.updated_followup_count, 2);
    }

    #[test]
    fn test_time_pressure_overrides_middling_answer() {
        // completeness 40: not poor enough for a follow-up, not complete
        // enough to be worth the last 10 seconds.
        let mut v = decent_verdict();
        v.completeness = 40;
        let result = resolve(v, 0, 10);
        assert_eq!(result.action, InterviewAction::NextQuestion);
        assert_eq!(result.reason, "time_constraint");
        assert_eq!(result.updated_followup_count, 0);
    }

    #[test]
    fn test_no_time_pressure_for_complete_answers() {
        let mut v = decent_verdict();
        v.completeness = 60;
        let result = resolve(v, 0, 10);
        assert_eq!(result.reason, "good_answer");
    }

    #[test]
    fn test_clean_advance_uses_quality_reason_and_feedback() {
        let mut v = decent_verdict();
        v.completeness = 85;
        v.overall_quality = AnswerQuality::Excellent;
        v.feedback = "Excellent explanation!".to_string();
        let result = resolve(v, 0, 200);
        assert_eq!(result.action, InterviewAction::NextQuestion);
        assert_eq!(result.reason, "excellent_answer");
        assert_eq!(result.message, "Excellent explanation!");
        assert!(result.followup_type.is_none());
    }

    /// Termination bound: walking the engine with the counts it hands back
    /// never exceeds two follow-ups, then always advances.
    #[test]
    fn test_followup_escalation_terminates_within_two() {
        let awful = || {
            let mut v = decent_verdict();
            v.completeness = 0;
            v
        };

        let first = resolve(awful(), 0, 300);
        assert_eq!(first.action, InterviewAction::Followup);
        assert_eq!(first.updated_followup_count, 1);

        let second = resolve(awful(), first.updated_followup_count, 300);
        assert_eq!(second.action, InterviewAction::Followup);
        assert_eq!(second.updated_followup_count, 2);

        let third = resolve(awful(), second.updated_followup_count, 300);
        assert_eq!(third.action, InterviewAction::NextQuestion);
        assert_eq!(third.reason, "followup_limit_reached");
        assert_eq!(third.updated_followup_count, 2);
    }

    /// The incrementing rules (3-5) are the only ones that raise the count,
    /// and none can push it past the cap.
    #[test]
    fn test_updated_count_never_exceeds_cap() {
        for count in 0..=4u8 {
            for completeness in [0u8, 24, 29, 50] {
                for (off_track, relevance) in [(false, 80u8), (true, 10u8)] {
                    let mut v = decent_verdict();
                    v.completeness = completeness;
                    v.is_off_track = off_track;
                    v.relevance = relevance;
                    let result = resolve(v, count, 300);
                    assert!(
                        result.updated_followup_count <= MAX_FOLLOWUPS,
                        "count {} completeness {} off_track {} produced {}",
                        count,
                        completeness,
                        off_track,
                        result.updated_followup_count
                    );
                }
            }
        }
    }

    #[test]
    fn test_fallback_verdict_advances_cleanly() {
        // The all-50 fallback must sail through the rules to a plain advance.
        let result = resolve(AnswerVerdict::fallback("judge down"), 0, 300);
        assert_eq!(result.action, InterviewAction::NextQuestion);
        assert_eq!(result.reason, "fair_answer");
    }

    #[test]
    fn test_action_serializes_snake_case() {
        let json = serde_json::to_string(&InterviewAction::NextQuestion).unwrap();
        assert_eq!(json, r#""next_question""#);
    }

    #[test]
    fn test_followup_type_omitted_when_absent() {
        let result = resolve(decent_verdict(), 0, 300);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("followup_type").is_none());
        assert_eq!(json["action"], "next_question");
    }
}
