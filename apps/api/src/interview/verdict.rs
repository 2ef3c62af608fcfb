//! Answer verdict — the structured multi-dimensional quality score for one
//! answer, plus defensive normalization of raw judge output.
//!
//! The judge is an untrusted oracle: its JSON is deserialized into a raw
//! schema where EVERY field has a default, then normalized (scores clamped
//! to 0-100, enum strings parsed leniently). A payload that fails even that
//! is replaced wholesale by `AnswerVerdict::fallback` — no judge output can
//! ever make evaluation fail.

use serde::{Deserialize, Serialize};

/// Neutral feedback used when the judge supplies none (or nothing at all).
pub const NEUTRAL_FEEDBACK: &str = "Thank you for your answer.";

const SCORE_FALLBACK: i64 = 50;

/// Overall quality band for one answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerQuality {
    Excellent,
    Good,
    #[default]
    Fair,
    Poor,
    Incomplete,
}

impl AnswerQuality {
    /// Lenient parse; unknown strings land on `Fair`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "excellent" => AnswerQuality::Excellent,
            "good" => AnswerQuality::Good,
            "poor" => AnswerQuality::Poor,
            "incomplete" => AnswerQuality::Incomplete,
            _ => AnswerQuality::Fair,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerQuality::Excellent => "excellent",
            AnswerQuality::Good => "good",
            AnswerQuality::Fair => "fair",
            AnswerQuality::Poor => "poor",
            AnswerQuality::Incomplete => "incomplete",
        }
    }
}

/// A follow-up question category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowupKind {
    #[default]
    Elaboration,
    Clarification,
    Redirect,
}

impl FollowupKind {
    /// Lenient parse for caller-supplied type strings; unknown values
    /// default to elaboration.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "clarification" => FollowupKind::Clarification,
            "redirect" => FollowupKind::Redirect,
            _ => FollowupKind::Elaboration,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FollowupKind::Elaboration => "elaboration",
            FollowupKind::Clarification => "clarification",
            FollowupKind::Redirect => "redirect",
        }
    }
}

/// The judge's advisory follow-up hint. Distinct from `FollowupKind` because
/// `none` is a meaningful value here, while the Decision Engine re-derives
/// the real follow-up decision from scores and never reads this field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowupHint {
    Elaboration,
    Clarification,
    Redirect,
    #[default]
    None,
}

impl FollowupHint {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "elaboration" => FollowupHint::Elaboration,
            "clarification" => FollowupHint::Clarification,
            "redirect" => FollowupHint::Redirect,
            _ => FollowupHint::None,
        }
    }
}

/// Structured verdict for one question/answer pair. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerVerdict {
    pub clarity: u8,
    pub completeness: u8,
    pub relevance: u8,
    pub depth: u8,
    pub coherence: u8,
    pub overall_quality: AnswerQuality,
    /// Advisory only — the Decision Engine re-derives the real decision.
    pub needs_followup: bool,
    pub followup_type_hint: FollowupHint,
    pub is_rambling: bool,
    pub is_off_track: bool,
    pub feedback: String,
    pub reason: String,
}

impl AnswerVerdict {
    /// Deterministic safe default substituted whenever the judge is
    /// unreachable or its output cannot be parsed. All scores 50, quality
    /// fair, no follow-up — the interview proceeds rather than failing.
    pub fn fallback(reason: impl Into<String>) -> Self {
        AnswerVerdict {
            clarity: 50,
            completeness: 50,
            relevance: 50,
            depth: 50,
            coherence: 50,
            overall_quality: AnswerQuality::Fair,
            needs_followup: false,
            followup_type_hint: FollowupHint::None,
            is_rambling: false,
            is_off_track: false,
            feedback: NEUTRAL_FEEDBACK.to_string(),
            reason: reason.into(),
        }
    }

    /// Verdict for a blank answer: very poor, not an error. Completeness 0
    /// steers the Decision Engine toward an elaboration follow-up.
    pub fn empty_answer() -> Self {
        AnswerVerdict {
            clarity: 0,
            completeness: 0,
            relevance: 0,
            depth: 0,
            coherence: 0,
            overall_quality: AnswerQuality::Incomplete,
            needs_followup: true,
            followup_type_hint: FollowupHint::Elaboration,
            is_rambling: false,
            is_off_track: false,
            feedback: "I didn't catch an answer there.".to_string(),
            reason: "empty_answer".to_string(),
        }
    }
}

/// Raw judge schema. Every field defaults so a partially valid object
/// degrades per-field instead of failing the whole parse.
#[derive(Debug, Deserialize)]
pub(crate) struct RawVerdict {
    #[serde(default = "default_score")]
    clarity: i64,
    #[serde(default = "default_score")]
    completeness: i64,
    #[serde(default = "default_score")]
    relevance: i64,
    #[serde(default = "default_score")]
    depth: i64,
    #[serde(default = "default_score")]
    coherence: i64,
    #[serde(default)]
    overall_quality: String,
    #[serde(default)]
    needs_followup: bool,
    #[serde(default)]
    followup_type: String,
    #[serde(default)]
    is_rambling: bool,
    #[serde(default)]
    is_off_track: bool,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    reason: String,
}

fn default_score() -> i64 {
    SCORE_FALLBACK
}

impl RawVerdict {
    /// Clamps scores into [0,100] and parses enum strings leniently.
    pub(crate) fn normalize(self) -> AnswerVerdict {
        let feedback = if self.feedback.trim().is_empty() {
            NEUTRAL_FEEDBACK.to_string()
        } else {
            self.feedback
        };

        AnswerVerdict {
            clarity: clamp_score(self.clarity),
            completeness: clamp_score(self.completeness),
            relevance: clamp_score(self.relevance),
            depth: clamp_score(self.depth),
            coherence: clamp_score(self.coherence),
            overall_quality: AnswerQuality::parse(&self.overall_quality),
            needs_followup: self.needs_followup,
            followup_type_hint: FollowupHint::parse(&self.followup_type),
            is_rambling: self.is_rambling,
            is_off_track: self.is_off_track,
            feedback,
            reason: self.reason,
        }
    }
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_clamped_to_range() {
        let raw: RawVerdict = serde_json::from_str(
            r#"{"clarity": 150, "completeness": -20, "relevance": 100, "depth": 0, "coherence": 42}"#,
        )
        .unwrap();
        let verdict = raw.normalize();
        assert_eq!(verdict.clarity, 100);
        assert_eq!(verdict.completeness, 0);
        assert_eq!(verdict.relevance, 100);
        assert_eq!(verdict.depth, 0);
        assert_eq!(verdict.coherence, 42);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let raw: RawVerdict = serde_json::from_str("{}").unwrap();
        let verdict = raw.normalize();
        assert_eq!(verdict.clarity, 50);
        assert_eq!(verdict.overall_quality, AnswerQuality::Fair);
        assert!(!verdict.needs_followup);
        assert_eq!(verdict.followup_type_hint, FollowupHint::None);
        assert_eq!(verdict.feedback, NEUTRAL_FEEDBACK);
    }

    #[test]
    fn test_unknown_quality_normalizes_to_fair() {
        assert_eq!(AnswerQuality::parse("stellar"), AnswerQuality::Fair);
        assert_eq!(AnswerQuality::parse(""), AnswerQuality::Fair);
        assert_eq!(AnswerQuality::parse("EXCELLENT"), AnswerQuality::Excellent);
    }

    #[test]
    fn test_unknown_followup_kind_defaults_to_elaboration() {
        assert_eq!(FollowupKind::parse("probe"), FollowupKind::Elaboration);
        assert_eq!(FollowupKind::parse("redirect"), FollowupKind::Redirect);
        assert_eq!(
            FollowupKind::parse(" Clarification "),
            FollowupKind::Clarification
        );
    }

    #[test]
    fn test_unknown_hint_normalizes_to_none() {
        assert_eq!(FollowupHint::parse("probe"), FollowupHint::None);
        assert_eq!(FollowupHint::parse("none"), FollowupHint::None);
        assert_eq!(FollowupHint::parse("redirect"), FollowupHint::Redirect);
    }

    #[test]
    fn test_fallback_verdict_values() {
        let verdict = AnswerVerdict::fallback("judge unavailable");
        assert_eq!(verdict.clarity, 50);
        assert_eq!(verdict.completeness, 50);
        assert_eq!(verdict.relevance, 50);
        assert_eq!(verdict.depth, 50);
        assert_eq!(verdict.coherence, 50);
        assert_eq!(verdict.overall_quality, AnswerQuality::Fair);
        assert!(!verdict.needs_followup);
        assert!(!verdict.is_rambling);
        assert!(!verdict.is_off_track);
        assert_eq!(verdict.reason, "judge unavailable");
    }

    #[test]
    fn test_empty_answer_verdict_is_incomplete() {
        let verdict = AnswerVerdict::empty_answer();
        assert_eq!(verdict.completeness, 0);
        assert_eq!(verdict.overall_quality, AnswerQuality::Incomplete);
        assert!(verdict.needs_followup);
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let json = serde_json::to_string(&AnswerQuality::Excellent).unwrap();
        assert_eq!(json, r#""excellent""#);
    }

    #[test]
    fn test_full_raw_verdict_parses() {
        let raw: RawVerdict = serde_json::from_str(
            r#"{
                "clarity": 75, "completeness": 80, "relevance": 90, "depth": 65,
                "coherence": 85, "overall_quality": "good", "needs_followup": false,
                "followup_type": "none", "is_rambling": false, "is_off_track": false,
                "feedback": "Good point!", "reason": "solid on-topic answer"
            }"#,
        )
        .unwrap();
        let verdict = raw.normalize();
        assert_eq!(verdict.overall_quality, AnswerQuality::Good);
        assert_eq!(verdict.completeness, 80);
        assert_eq!(verdict.feedback, "Good point!");
    }
}
