//! Session and payment state types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::survey::{Answer, Survey, SurveyType};

/// Lifecycle state of a survey session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// Payment state of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Free,
    Paid,
}

impl PaymentStatus {
    /// Tier requested for a report generation call.
    pub fn from_paid(paid: bool) -> Self {
        if paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Free
        }
    }

    /// Lowercase tier name as used in cache keys, metrics, and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Free => "free",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's survey session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySession {
    pub id: String,
    pub user_id: i64,
    pub survey_type: SurveyType,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A session bundled with everything needed to score it, as resolved by
/// the [`SessionStore`](crate::SessionStore) in one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionWithAnswers {
    pub session: SurveySession,
    pub survey: Survey,
    pub answers: Vec<Answer>,
}

/// One entry of a user's completed-session listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub survey_type: SurveyType,
    pub completed_at: DateTime<Utc>,
}
