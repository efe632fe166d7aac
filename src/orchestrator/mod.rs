//! Report orchestration.
//!
//! [`ReportOrchestrator`] turns a session id and a payment tier into a
//! rendered report: session data from a [`SessionStore`](crate::SessionStore),
//! scores and document composition from [`scoring`](crate::scoring),
//! narrative from a [`ReportCatalog`](crate::ReportCatalog), bytes from
//! a [`ReportRenderer`](crate::ReportRenderer), with a
//! [`QueryCache`](crate::QueryCache) in front of every store read and
//! composed document.

mod builder;
mod reports;

pub use builder::ReportOrchestratorBuilder;
pub use reports::ReportOrchestrator;
