//! Round profiles — maps an interview round to judge context, question style,
//! and sampling temperature.
//!
//! Round labels arrive as free-form strings from the caller and are never
//! validated against a closed set: unknown labels fall back to the generic
//! profile so a misconfigured caller degrades gracefully instead of erroring.

use serde::{Deserialize, Serialize};

/// The interview rounds Parley knows how to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    Screening,
    Coding,
    Technical,
    Behavioral,
    SystemDesign,
    #[default]
    General,
}

impl RoundKind {
    /// Lenient parse from a caller-supplied label. `formal_qa` is the legacy
    /// name for the screening round and is still accepted.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "screening" | "formal_qa" => RoundKind::Screening,
            "coding" => RoundKind::Coding,
            "technical" => RoundKind::Technical,
            "behavioral" => RoundKind::Behavioral,
            "system_design" | "system-design" => RoundKind::SystemDesign,
            _ => RoundKind::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoundKind::Screening => "screening",
            RoundKind::Coding => "coding",
            RoundKind::Technical => "technical",
            RoundKind::Behavioral => "behavioral",
            RoundKind::SystemDesign => "system_design",
            RoundKind::General => "general",
        }
    }
}

/// Prompt calibration for a specific round.
#[derive(Debug, Clone)]
pub struct RoundProfile {
    pub display_name: &'static str,
    /// Appended to the evaluation prompt so the judge scores in context.
    pub judge_context: &'static str,
    /// Style guidance injected into question-generation prompts.
    pub question_style: &'static str,
    /// Sampling temperature for question generation in this round.
    pub question_temperature: f32,
}

/// Returns the calibration profile for a round.
pub fn get_round_profile(kind: RoundKind) -> RoundProfile {
    match kind {
        RoundKind::Screening => RoundProfile {
            display_name: "HR screening",
            judge_context: "This is an HR screening round: value communication, \
                motivation, and self-awareness over technical depth.",
            question_style: "Warm, professional HR interviewer. Ask SIMPLE, GENERIC \
                questions about background, motivation, strengths, and resume \
                projects. No sharp technical questions, no trade-off questions. \
                Friendly and conversational.",
            question_temperature: 1.2,
        },
        RoundKind::Coding => RoundProfile {
            display_name: "coding",
            judge_context: "This is a coding round: value algorithmic reasoning, \
                correctness of approach, and complexity awareness.",
            question_style: "Precise coding interviewer. Pose one well-specified \
                programming problem with clear constraints and an example. State \
                the expected input/output format.",
            question_temperature: 0.0,
        },
        RoundKind::Technical => RoundProfile {
            display_name: "technical",
            judge_context: "This is a technical deep-dive round: value depth, \
                correct use of terminology, and concrete experience.",
            question_style: "Senior technical interviewer. Every question MUST \
                build on the candidate's resume skills and previous answers. \
                Explore depth on technologies they actually mentioned. Do not \
                repeat questions or address the candidate by name.",
            question_temperature: 1.0,
        },
        RoundKind::Behavioral => RoundProfile {
            display_name: "behavioral",
            judge_context: "This is a behavioral round: value concrete situations, \
                actions taken, and reflection. STAR-shaped answers score well.",
            question_style: "Empathetic behavioral interviewer. Ask about real past \
                situations: teamwork, conflict, failure, ownership. One situation \
                per question, conversational tone.",
            question_temperature: 1.3,
        },
        RoundKind::SystemDesign => RoundProfile {
            display_name: "system design",
            judge_context: "This is a system design round: value requirement \
                clarification, component reasoning, and trade-off awareness.",
            question_style: "Principal engineer running a design discussion. Pose \
                an open-ended design prompt scoped to the candidate's experience \
                level, then probe scaling, storage, and failure handling.",
            question_temperature: 1.0,
        },
        RoundKind::General => RoundProfile {
            display_name: "general",
            judge_context: "This is a general interview round.",
            question_style: "Professional interviewer. Ask one clear, relevant \
                question grounded in the candidate's background.",
            question_temperature: 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_rounds() {
        assert_eq!(RoundKind::parse("screening"), RoundKind::Screening);
        assert_eq!(RoundKind::parse("coding"), RoundKind::Coding);
        assert_eq!(RoundKind::parse("technical"), RoundKind::Technical);
        assert_eq!(RoundKind::parse("behavioral"), RoundKind::Behavioral);
        assert_eq!(RoundKind::parse("system_design"), RoundKind::SystemDesign);
    }

    #[test]
    fn test_parse_legacy_screening_alias() {
        assert_eq!(RoundKind::parse("formal_qa"), RoundKind::Screening);
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(RoundKind::parse("  Coding "), RoundKind::Coding);
        assert_eq!(RoundKind::parse("SYSTEM-DESIGN"), RoundKind::SystemDesign);
    }

    #[test]
    fn test_unknown_round_falls_back_to_general() {
        assert_eq!(RoundKind::parse("astrology"), RoundKind::General);
        assert_eq!(RoundKind::parse(""), RoundKind::General);
    }

    #[test]
    fn test_coding_round_is_deterministic() {
        let profile = get_round_profile(RoundKind::Coding);
        assert_eq!(profile.question_temperature, 0.0);
    }

    #[test]
    fn test_screening_round_is_conversational() {
        let profile = get_round_profile(RoundKind::Screening);
        assert!(profile.question_temperature > 1.0);
    }

    #[test]
    fn test_round_label_round_trips_through_parse() {
        for kind in [
            RoundKind::Screening,
            RoundKind::Coding,
            RoundKind::Technical,
            RoundKind::Behavioral,
            RoundKind::SystemDesign,
            RoundKind::General,
        ] {
            assert_eq!(RoundKind::parse(kind.label()), kind);
        }
    }
}
