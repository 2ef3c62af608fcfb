//! Interruption Monitor — decides whether to cut an answer short.
//!
//! Pure and synchronous so it can run mid-answer, before the answer is
//! finalized and without any judge call. Independent of the Decision
//! Engine: both may examine the same answer, and the caller chooses which
//! to consult first.

use serde::Serialize;

use crate::interview::decision::TIME_PRESSURE_SECS;

/// Default word cap before an answer counts as rambling.
pub const DEFAULT_MAX_ANSWER_WORDS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterruptReason {
    TimeRunningOut,
    Rambling,
    None,
}

/// Result of one interruption check.
#[derive(Debug, Clone, Serialize)]
pub struct InterruptCheck {
    pub should_interrupt: bool,
    pub reason: InterruptReason,
    pub message: String,
}

/// Checks whether the interview should interrupt the candidate. Time
/// pressure wins over length: the clock is an absolute deadline, a long
/// answer is not.
pub fn should_interrupt(
    answer_so_far: &str,
    time_remaining_secs: i64,
    max_word_count: usize,
) -> InterruptCheck {
    if time_remaining_secs < TIME_PRESSURE_SECS {
        return InterruptCheck {
            should_interrupt: true,
            reason: InterruptReason::TimeRunningOut,
            message: "I need to stop you there as we're running short on time. \
                      Let me ask the next question."
                .to_string(),
        };
    }

    let word_count = answer_so_far.split_whitespace().count();
    if word_count > max_word_count {
        return InterruptCheck {
            should_interrupt: true,
            reason: InterruptReason::Rambling,
            message: "I appreciate the detail. Let me ask a more specific question..."
                .to_string(),
        };
    }

    InterruptCheck {
        should_interrupt: false,
        reason: InterruptReason::None,
        message: String::new(),
    }
}
