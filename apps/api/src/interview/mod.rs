// The interview core: answer evaluation and dynamic flow control.
// Implements: quality evaluation, the decision rule table, follow-up
// generation, and the interruption monitor.
// All LLM calls go through llm_client — no direct API calls here.

pub mod decision;
pub mod evaluator;
pub mod followup;
pub mod handlers;
pub mod interruption;
pub mod prompts;
pub mod verdict;
