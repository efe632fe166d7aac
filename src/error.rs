//! Scorecard error types

/// Scorecard error types
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    // Lookup errors
    #[error("session {0} not found")]
    SessionNotFound(String),

    // Validation errors
    /// Answer score outside the valid 1..=10 range reached the scoring
    /// boundary. Producers are expected to validate before constructing
    /// scoring input; this surfaces the ones that slipped through.
    #[error("invalid score {score} for question {question_id}: must be between 1 and 10")]
    InvalidScore { question_id: u32, score: u8 },

    // Collaborator errors
    #[error("render failed: {0}")]
    Render(String),

    #[error("session store error: {0}")]
    Store(String),

    // Configuration errors
    #[error("no session store configured")]
    NoStore,

    #[error("no renderer configured")]
    NoRenderer,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScorecardError {
    /// Whether this error means the requested entity does not exist.
    ///
    /// Absence is never cached; the orchestrator relies on this staying
    /// true for every lookup-miss variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScorecardError::SessionNotFound(_))
    }
}

/// Result type alias for scorecard operations
pub type Result<T> = std::result::Result<T, ScorecardError>;
