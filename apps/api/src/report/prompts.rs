// All LLM prompt constants for final-report synthesis.

/// System prompt for the final hiring report — enforces JSON-only output.
pub const REPORT_SYSTEM: &str = "\
You are an expert interview evaluator generating a comprehensive final report.

Your report must include:
1. OVERALL ASSESSMENT: overall impression and a 0-100 score
2. ROUND-BY-ROUND ANALYSIS: performance in each interview round
3. SKILL ASSESSMENT: technical and soft skills with evidence
4. STRENGTHS and AREAS FOR IMPROVEMENT
5. RECOMMENDATIONS: specific, actionable advice
6. HIRING RECOMMENDATION: strong_hire/hire/maybe/no_hire with reasoning

Be specific and reference actual answers from the transcript.

{json_only}";

/// User prompt for the final report. Replace `{candidate}`, `{resume}`,
/// and `{transcript}`.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"CANDIDATE INFORMATION:
{candidate}

RESUME ANALYSIS:
{resume}

INTERVIEW TRANSCRIPT:
{transcript}

Generate the final report as JSON with this EXACT schema:
{
    "overall_score": <0-100>,
    "overall_feedback": "overall assessment...",
    "round_analysis": [
        {
            "round": "round_name",
            "score": <0-100>,
            "strengths": ["...", "..."],
            "weaknesses": ["...", "..."],
            "key_observations": "..."
        }
    ],
    "skill_assessment": [
        {
            "skill": "skill_name",
            "level": "beginner|intermediate|advanced|expert",
            "evidence": "based on their answer about..."
        }
    ],
    "strengths": ["overall strength 1", "..."],
    "improvements_needed": ["area to improve 1", "..."],
    "recommendations": ["specific recommendation 1", "..."],
    "hiring_recommendation": {
        "decision": "strong_hire|hire|maybe|no_hire",
        "confidence": <0-100>,
        "reasoning": "..."
    }
}"#;
