// Shared prompt constants and prompt-building utilities.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Lenient-scoring fragment shared by evaluation prompts. Parley is a
/// practice tool, not a hiring gate: reasonable answers land 60-80 and only
/// empty, nonsensical, or fully off-topic answers score below 40.
pub const LENIENT_SCORING_INSTRUCTION: &str = "\
    SCORING GUIDELINES (LENIENT MODE): \
    Give the benefit of the doubt - if the answer makes sense, score 60 or above. \
    Most reasonable answers should land in the 60-80 range. \
    Reserve 80+ for truly excellent, detailed answers. \
    Score below 40 ONLY if the answer is empty, nonsensical, one or two words, \
    or completely off-topic.";
