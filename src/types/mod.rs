//! Public types for the scorecard API.

mod document;
mod score;
mod session;
mod survey;

pub use document::{CategoryResult, PieChartData, ReportContent, SubcategoryResult, SurveyResults};
pub use score::ScoreResult;
pub use session::{PaymentStatus, SessionStatus, SessionSummary, SessionWithAnswers, SurveySession};
pub use survey::{Answer, Category, Question, Subcategory, Survey, SurveyType};
