//! Deterministic per-round and whole-interview analysis.
//!
//! Pure rule tables over scores and position keywords — no judge call, fully
//! testable. The LLM-written narrative report lives in `synthesis`; this
//! module backs the cheap, always-available analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::rounds::RoundKind;

/// Score at or above which a round counts as excellent.
const EXCELLENT_SCORE: u32 = 80;
/// Score at or above which a round counts as good.
const GOOD_SCORE: u32 = 60;
/// Below this, round-specific practice recommendations kick in.
const PRACTICE_SCORE: u32 = 70;
/// Each list in an overall analysis is capped at this many items.
const MAX_ANALYSIS_ITEMS: usize = 6;

/// Strengths, weaknesses, and recommendations for one round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Aggregated analysis across all rounds.
#[derive(Debug, Clone, Serialize)]
pub struct OverallAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringDecision {
    StrongHire,
    Hire,
    Maybe,
    NoHire,
}

/// The final hire/no-hire call with its templated reasoning.
#[derive(Debug, Clone, Serialize)]
pub struct HiringCall {
    pub decision: HiringDecision,
    pub reason: String,
}

/// Rule-based analysis of a single round from its 0-100 score.
pub fn analyze_round(round: RoundKind, score: u32) -> RoundAnalysis {
    let name = round.label();
    let mut analysis = RoundAnalysis::default();

    if score >= EXCELLENT_SCORE {
        analysis
            .strengths
            .push(format!("Excellent performance in the {name} round"));
        analysis
            .strengths
            .push("Demonstrated strong understanding of concepts".to_string());
        analysis
            .recommendations
            .push("Continue practicing to maintain this level".to_string());
    } else if score >= GOOD_SCORE {
        analysis
            .strengths
            .push(format!("Good performance in the {name} round"));
        analysis
            .weaknesses
            .push("Some areas need improvement".to_string());
        analysis
            .recommendations
            .push(format!("Review {name} fundamentals"));
    } else {
        analysis
            .weaknesses
            .push(format!("Needs significant improvement in {name}"));
        analysis
            .recommendations
            .push(format!("Focus on strengthening {name} skills"));
        analysis
            .recommendations
            .push("Practice more problems in this area".to_string());
    }

    if score < PRACTICE_SCORE {
        match round {
            RoundKind::Coding => analysis
                .recommendations
                .push("Practice more data-structures and algorithms problems".to_string()),
            RoundKind::Technical => analysis
                .recommendations
                .push("Review framework documentation and best practices".to_string()),
            RoundKind::SystemDesign => analysis
                .recommendations
                .push("Study system design patterns and scalability concepts".to_string()),
            _ => {}
        }
    }

    analysis
}

/// Aggregates per-round analyses into an overall picture and maps the
/// overall score to a hiring decision.
pub fn analyze_interview(
    rounds: &[RoundAnalysis],
    overall_score: u32,
    position: &str,
) -> (OverallAnalysis, HiringCall) {
    let mut strengths: Vec<String> = Vec::new();
    let mut weaknesses: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    for round in rounds {
        strengths.extend(round.strengths.iter().cloned());
        weaknesses.extend(round.weaknesses.iter().cloned());
        recommendations.extend(round.recommendations.iter().cloned());
    }

    let role = RoleFocus::detect(position);
    if overall_score >= 70 {
        strengths.extend(role.strengths().iter().map(|s| s.to_string()));
    }
    recommendations.extend(role.recommendations().iter().map(|s| s.to_string()));

    if overall_score < 50 {
        weaknesses.push("Needs significant improvement in core concepts".to_string());
        weaknesses.push("Limited practical experience evident".to_string());
    } else if overall_score < 70 {
        weaknesses.push("Some gaps in fundamental knowledge".to_string());
    }

    let analysis = OverallAnalysis {
        strengths: finalize(strengths, "Participated in the full interview"),
        weaknesses: finalize(weaknesses, "Needs more practice and preparation"),
        recommendations: finalize(recommendations, "Continue learning and practicing"),
    };

    (analysis, hiring_call(overall_score, position))
}

/// Dedups preserving first occurrence, caps the list, and substitutes an
/// encouraging default when nothing was collected.
fn finalize(items: Vec<String>, fallback: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out: Vec<String> = items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(MAX_ANALYSIS_ITEMS)
        .collect();
    if out.is_empty() {
        out.push(fallback.to_string());
    }
    out
}

fn hiring_call(overall_score: u32, position: &str) -> HiringCall {
    let role = if position.trim().is_empty() {
        "the target".to_string()
    } else {
        position.trim().to_string()
    };

    let (decision, reason) = if overall_score >= 85 {
        (
            HiringDecision::StrongHire,
            format!(
                "Exceptional performance with {overall_score}/100 overall. The candidate \
                 demonstrated strong technical skill and clear communication. Ready for \
                 the {role} role."
            ),
        )
    } else if overall_score >= 70 {
        (
            HiringDecision::Hire,
            format!(
                "Good performance with {overall_score}/100 overall. The candidate shows \
                 solid understanding and potential for growth in the {role} role."
            ),
        )
    } else if overall_score >= 50 {
        (
            HiringDecision::Maybe,
            format!(
                "Average performance with {overall_score}/100 overall. The candidate needs \
                 improvement in some areas but shows potential for the {role} role with \
                 proper training."
            ),
        )
    } else {
        (
            HiringDecision::NoHire,
            format!(
                "Below expectations with {overall_score}/100 overall. The candidate needs \
                 significant improvement before being considered for the {role} role."
            ),
        )
    };

    HiringCall { decision, reason }
}

/// Position-keyword detection for role-specific guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleFocus {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
    Ml,
    Other,
}

impl RoleFocus {
    fn detect(position: &str) -> Self {
        let p = position.to_lowercase();
        if p.contains("fullstack") || p.contains("full stack") {
            RoleFocus::Fullstack
        } else if p.contains("frontend") || p.contains("ui") {
            RoleFocus::Frontend
        } else if p.contains("backend") {
            RoleFocus::Backend
        } else if p.contains("devops") {
            RoleFocus::Devops
        } else if p.contains("ml") || p.contains("ai") {
            RoleFocus::Ml
        } else if p.contains("data") {
            RoleFocus::Data
        } else {
            RoleFocus::Other
        }
    }

    fn strengths(&self) -> &'static [&'static str] {
        match self {
            RoleFocus::Frontend => &[
                "Strong grasp of frontend technologies",
                "Good understanding of UI/UX principles",
            ],
            RoleFocus::Backend => &[
                "Solid backend development knowledge",
                "Good understanding of APIs and databases",
            ],
            RoleFocus::Fullstack => &[
                "Well-rounded full-stack capabilities",
                "Balanced frontend and backend knowledge",
            ],
            RoleFocus::Devops => &["Good understanding of DevOps practices"],
            RoleFocus::Data | RoleFocus::Ml => {
                &["Strong analytical and problem-solving skills"]
            }
            RoleFocus::Other => &["Demonstrated technical competence"],
        }
    }

    fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RoleFocus::Frontend => &[
                "Practice building responsive layouts and components",
                "Study modern CSS techniques and accessibility",
            ],
            RoleFocus::Backend => &[
                "Practice designing RESTful APIs",
                "Study database optimization and scaling",
            ],
            RoleFocus::Fullstack => &[
                "Practice end-to-end application development",
                "Study frontend and backend integration",
            ],
            RoleFocus::Devops => &[
                "Practice CI/CD pipeline setup",
                "Study containerization and orchestration",
            ],
            RoleFocus::Data => &[
                "Practice data analysis and visualization",
                "Study statistical methods and ML algorithms",
            ],
            RoleFocus::Ml => &[
                "Practice implementing ML models",
                "Study deep learning frameworks",
            ],
            RoleFocus::Other => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excellent_round_has_no_weaknesses() {
        let analysis = analyze_round(RoundKind::Technical, 85);
        assert!(!analysis.strengths.is_empty());
        assert!(analysis.weaknesses.is_empty());
    }

    #[test]
    fn test_good_round_mixes_strengths_and_weaknesses() {
        let analysis = analyze_round(RoundKind::Screening, 65);
        assert!(analysis.strengths[0].contains("Good performance"));
        assert_eq!(analysis.weaknesses.len(), 1);
    }

    #[test]
    fn test_poor_round_is_all_weakness() {
        let analysis = analyze_round(RoundKind::Coding, 40);
        assert!(analysis.strengths.is_empty());
        assert!(analysis.weaknesses[0].contains("significant improvement"));
    }

    #[test]
    fn test_low_coding_score_recommends_practice() {
        let analysis = analyze_round(RoundKind::Coding, 55);
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("data-structures and algorithms")));
    }

    #[test]
    fn test_high_coding_score_skips_practice_recommendation() {
        let analysis = analyze_round(RoundKind::Coding, 75);
        assert!(!analysis
            .recommendations
            .iter()
            .any(|r| r.contains("data-structures")));
    }

    #[test]
    fn test_system_design_gets_design_recommendation_below_70() {
        let analysis = analyze_round(RoundKind::SystemDesign, 62);
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("system design patterns")));
    }

    fn round_with(strength: &str) -> RoundAnalysis {
        RoundAnalysis {
            strengths: vec![strength.to_string()],
            weaknesses: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_interview_aggregation_dedups_preserving_order() {
        let rounds = vec![
            round_with("Communicates clearly"),
            round_with("Communicates clearly"),
            round_with("Strong fundamentals"),
        ];
        let (analysis, _) = analyze_interview(&rounds, 75, "backend engineer");
        let clear_count = analysis
            .strengths
            .iter()
            .filter(|s| s.as_str() == "Communicates clearly")
            .count();
        assert_eq!(clear_count, 1);
        assert_eq!(analysis.strengths[0], "Communicates clearly");
    }

    #[test]
    fn test_interview_lists_capped_at_six() {
        let rounds: Vec<RoundAnalysis> = (0..10)
            .map(|i| round_with(&format!("Strength {i}")))
            .collect();
        let (analysis, _) = analyze_interview(&rounds, 90, "backend");
        assert!(analysis.strengths.len() <= 6);
    }

    #[test]
    fn test_empty_rounds_get_encouraging_defaults() {
        let (analysis, _) = analyze_interview(&[], 75, "");
        assert!(!analysis.strengths.is_empty());
        assert!(!analysis.weaknesses.is_empty());
        assert!(!analysis.recommendations.is_empty());
    }

    #[test]
    fn test_backend_position_adds_api_guidance() {
        let (analysis, _) = analyze_interview(&[], 80, "Senior Backend Engineer");
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("RESTful APIs")));
        assert!(analysis
            .strengths
            .iter()
            .any(|s| s.contains("backend development")));
    }

    #[test]
    fn test_role_strengths_require_passing_score() {
        let (analysis, _) = analyze_interview(&[], 60, "frontend developer");
        assert!(!analysis
            .strengths
            .iter()
            .any(|s| s.contains("frontend technologies")));
    }

    #[test]
    fn test_hiring_decision_bands() {
        assert_eq!(hiring_call(90, "dev").decision, HiringDecision::StrongHire);
        assert_eq!(hiring_call(85, "dev").decision, HiringDecision::StrongHire);
        assert_eq!(hiring_call(84, "dev").decision, HiringDecision::Hire);
        assert_eq!(hiring_call(70, "dev").decision, HiringDecision::Hire);
        assert_eq!(hiring_call(69, "dev").decision, HiringDecision::Maybe);
        assert_eq!(hiring_call(50, "dev").decision, HiringDecision::Maybe);
        assert_eq!(hiring_call(49, "dev").decision, HiringDecision::NoHire);
    }

    #[test]
    fn test_hiring_reason_mentions_score() {
        let call = hiring_call(72, "Platform Engineer");
        assert!(call.reason.contains("72/100"));
        assert!(call.reason.contains("Platform Engineer"));
    }

    #[test]
    fn test_role_detection_prefers_fullstack_over_parts() {
        assert_eq!(
            RoleFocus::detect("Full Stack Developer"),
            RoleFocus::Fullstack
        );
        assert_eq!(RoleFocus::detect("frontend dev"), RoleFocus::Frontend);
        assert_eq!(RoleFocus::detect("ML engineer"), RoleFocus::Ml);
        assert_eq!(RoleFocus::detect("plumber"), RoleFocus::Other);
    }
}
