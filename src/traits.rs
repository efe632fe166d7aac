//! Collaborator traits for persistence and rendering.
//!
//! The orchestrator is generic over where sessions live and how
//! documents are rendered. Stores and renderers are injected through
//! [`ReportOrchestratorBuilder`](crate::ReportOrchestratorBuilder) as
//! `Arc<dyn ...>`, which enables decorators (an instrumented store, a
//! watermarking renderer) and in-memory doubles in tests.
//!
//! # Caching contract
//!
//! Store reads sit behind the orchestrator's [`QueryCache`](crate::QueryCache),
//! so implementations must be idempotent and must not cache internally.
//! A failed read is never cached; the next call reaches the store again.

use async_trait::async_trait;

use crate::Result;
use crate::types::{SessionSummary, SessionWithAnswers, SurveyResults};

/// Source of truth for sessions, answers, and payment state.
///
/// Implementations return
/// [`SessionNotFound`](crate::ScorecardError::SessionNotFound) for
/// unknown session ids and [`Store`](crate::ScorecardError::Store) for
/// backend failures.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store name for logging/debugging.
    fn name(&self) -> &str;

    /// Resolve a session together with its survey structure and
    /// answers, in one read.
    async fn session_with_answers(&self, session_id: &str) -> Result<SessionWithAnswers>;

    /// Number of completed sessions a user has.
    async fn completed_session_count(&self, user_id: i64) -> Result<u32>;

    /// Completed sessions for a user, newest first.
    async fn completed_sessions(&self, user_id: i64) -> Result<Vec<SessionSummary>>;

    /// Whether a paid report has been purchased for the session.
    async fn has_paid_report(&self, session_id: &str) -> Result<bool>;
}

/// Renders a composed result document into report bytes.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Renderer name for logging/debugging.
    fn name(&self) -> &str;

    /// Render the document. `paid` selects the detailed layout;
    /// renderers may ignore it when the document alone decides.
    async fn render(&self, results: &SurveyResults, paid: bool) -> Result<Vec<u8>>;
}
