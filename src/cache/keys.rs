//! Cache key grammar.
//!
//! Keys are `namespace:identifier:qualifier` with a fixed vocabulary,
//! kept stable so operators can reason about cache contents and target
//! `invalidate_pattern` calls at whole namespaces. The bare
//! `analytics:{id}` form predates the qualifier convention and is kept
//! for raw score results.

use crate::types::PaymentStatus;

/// Session bundle with survey structure and answers.
pub fn session_with_answers(session_id: &str) -> String {
    format!("session:{session_id}:with-answers")
}

/// Whether a paid report exists for the session.
pub fn session_has_paid(session_id: &str) -> String {
    format!("session:{session_id}:has-paid")
}

/// Composed result document, one entry per payment tier.
pub fn survey_results(session_id: &str, tier: PaymentStatus) -> String {
    format!("survey-results:{session_id}:{tier}")
}

/// Raw score results for a session.
pub fn session_analytics(session_id: &str) -> String {
    format!("analytics:{session_id}")
}

/// Count of completed sessions for a user.
pub fn user_completed_count(user_id: i64) -> String {
    format!("user:{user_id}:completed-count")
}

/// Completed-session listing for a user.
pub fn user_completed_sessions(user_id: i64) -> String {
    format!("user:{user_id}:completed-sessions")
}
