// All LLM prompt constants for question generation.
// Per-round style guidance comes from rounds::RoundProfile.

/// System prompt for question generation. Replace `{round_style}`.
pub const QUESTION_SYSTEM_TEMPLATE: &str = "\
You are conducting a mock interview.

YOUR ROLE: {round_style}

CRITICAL RULES:
- Ask exactly ONE question.
- Keep the question SHORT (1-2 sentences).
- Build naturally on previous answers; never repeat a previous question.
- Ground the question in the candidate's actual background where possible.

Return ONLY JSON: {\"question\": \"your question\"}";

/// User prompt for question generation. Replace `{question_number}`,
/// `{max_questions}`, `{job_description}`, `{background}`,
/// `{previous_answers}`, and `{extra_guidance}`.
pub const QUESTION_PROMPT_TEMPLATE: &str = "\
Generate question {question_number} of {max_questions}.

JOB ROLE:
{job_description}

CANDIDATE BACKGROUND:
{background}

RECENT CONVERSATION:
{previous_answers}
{extra_guidance}
Return ONLY JSON: {\"question\": \"your question\"}";
