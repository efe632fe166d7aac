//! Scorecard - scoring, caching, and report orchestration for
//! business-assessment surveys.
//!
//! A completed survey session is scored on a 0-100 scale (overall, per
//! category, per subcategory), composed into a result document with
//! narrative content from a CSV catalog, and rendered to bytes by a
//! pluggable renderer. A TTL query cache sits in front of the session
//! store and the composed documents so repeated report requests do not
//! recompute or re-read.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use scorecard::ReportOrchestrator;
//! # use scorecard::{ReportRenderer, SessionStore};
//! # fn collaborators() -> (Arc<dyn SessionStore>, Arc<dyn ReportRenderer>) {
//! #     unimplemented!()
//! # }
//!
//! #[tokio::main]
//! async fn main() -> scorecard::Result<()> {
//!     let (store, renderer) = collaborators();
//!     let orchestrator = ReportOrchestrator::builder()
//!         .store(store)
//!         .renderer(renderer)
//!         .build()?;
//!
//!     // First completed survey is free; later ones require payment.
//!     let paid = !orchestrator.is_report_free(42).await?;
//!     let report = orchestrator.generate_report("session-1", paid).await?;
//!
//!     println!("rendered {} bytes", report.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod scoring;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheStats, QueryCache};
pub use catalog::ReportCatalog;
pub use config::TtlConfig;
pub use error::{Result, ScorecardError};
pub use orchestrator::{ReportOrchestrator, ReportOrchestratorBuilder};
pub use traits::{ReportRenderer, SessionStore};

// Re-export all types
pub use types::{
    Answer, Category, CategoryResult, PaymentStatus, PieChartData, Question, ReportContent,
    ScoreResult, SessionStatus, SessionSummary, SessionWithAnswers, Subcategory, SubcategoryResult,
    Survey, SurveyResults, SurveySession, SurveyType,
};
