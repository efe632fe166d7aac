//! ReportOrchestrator - the cache-aware report pipeline.
//!
//! Each report-generation call moves through a fixed sequence: resolve
//! the session (cache or store), score and compose the document (cache
//! or fresh), render, return the bytes. Rendering is never cached and
//! never retried here; a render failure leaves the composed document in
//! place so the retry pays only for rendering.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::cache::{QueryCache, keys};
use crate::catalog::ReportCatalog;
use crate::config::TtlConfig;
use crate::error::{Result, ScorecardError};
use crate::scoring::{self, results::ResultsComposer};
use crate::telemetry;
use crate::traits::{ReportRenderer, SessionStore};
use crate::types::{
    CategoryResult, PaymentStatus, ScoreResult, SessionSummary, SessionWithAnswers, SurveyResults,
};

use super::ReportOrchestratorBuilder;

/// Cache-aware pipeline from session id to rendered report.
///
/// Construct via [`ReportOrchestrator::builder()`]. Cheap to share
/// behind an `Arc`; all methods take `&self`.
pub struct ReportOrchestrator {
    store: Arc<dyn SessionStore>,
    renderer: Arc<dyn ReportRenderer>,
    catalog: ReportCatalog,
    cache: Arc<QueryCache>,
    ttls: TtlConfig,
}

impl ReportOrchestrator {
    /// Create a new builder for configuring an orchestrator.
    pub fn builder() -> ReportOrchestratorBuilder {
        ReportOrchestratorBuilder::new()
    }

    pub(crate) fn new(
        store: Arc<dyn SessionStore>,
        renderer: Arc<dyn ReportRenderer>,
        catalog: ReportCatalog,
        cache: Arc<QueryCache>,
        ttls: TtlConfig,
    ) -> Self {
        Self {
            store,
            renderer,
            catalog,
            cache,
            ttls,
        }
    }

    /// The cache serving this orchestrator, for monitoring surfaces and
    /// scheduled [`cleanup_expired`](QueryCache::cleanup_expired) sweeps.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Generate the rendered report for a session.
    ///
    /// Session data and the composed document come through the cache;
    /// the byte output does not. Renderer failures propagate unchanged.
    /// Absent invalidation or new answers, repeated calls render the
    /// same document.
    #[instrument(skip(self), fields(operation = "generate_report"))]
    pub async fn generate_report(&self, session_id: &str, paid: bool) -> Result<Vec<u8>> {
        let start = Instant::now();
        let tier = PaymentStatus::from_paid(paid);

        let result = self.render_report(session_id, tier).await;
        record_report(tier, start, result.is_ok());
        result
    }

    /// The composed result document for a session, without rendering.
    #[instrument(skip(self), fields(operation = "survey_results"))]
    pub async fn survey_results(&self, session_id: &str, paid: bool) -> Result<SurveyResults> {
        self.composed_results(session_id, PaymentStatus::from_paid(paid))
            .await
    }

    /// Raw score results for a session, without narrative content.
    #[instrument(skip(self), fields(operation = "session_analytics"))]
    pub async fn session_analytics(&self, session_id: &str) -> Result<ScoreResult> {
        let bundle = self.validated_bundle(session_id).await?;
        self.cache
            .get_or_compute(
                &keys::session_analytics(session_id),
                Some(self.ttls.results()),
                || async {
                    Ok(scoring::calculate_scores(
                        &bundle.answers,
                        Some(&bundle.survey),
                    ))
                },
            )
            .await
    }

    /// Detailed results for one category of a session, by name.
    ///
    /// `Ok(None)` when the session's survey has no category with that
    /// name. Derived from the cached session bundle on every call.
    #[instrument(skip(self), fields(operation = "category_details"))]
    pub async fn category_details(
        &self,
        session_id: &str,
        category_name: &str,
        paid: bool,
    ) -> Result<Option<CategoryResult>> {
        let bundle = self.validated_bundle(session_id).await?;
        let composer = ResultsComposer::new(&self.catalog);
        Ok(composer.category_details(&bundle.survey, &bundle.answers, category_name, paid))
    }

    /// Whether the next report for this user is the free one.
    ///
    /// True exactly when the user's completed-session count is 1: the
    /// first completed survey is free, every later one requires
    /// payment. The count, not a flag, is the source of truth, so
    /// out-of-order report requests resolve consistently. Zero
    /// completed sessions answers `false`.
    #[instrument(skip(self), fields(operation = "is_report_free"))]
    pub async fn is_report_free(&self, user_id: i64) -> Result<bool> {
        let count = self
            .cache
            .get_or_compute(
                &keys::user_completed_count(user_id),
                Some(self.ttls.completed_count()),
                || self.store.completed_session_count(user_id),
            )
            .await?;
        Ok(count == 1)
    }

    /// Completed sessions for a user, newest first.
    #[instrument(skip(self), fields(operation = "completed_sessions"))]
    pub async fn completed_sessions(&self, user_id: i64) -> Result<Vec<SessionSummary>> {
        self.cache
            .get_or_compute(
                &keys::user_completed_sessions(user_id),
                Some(self.ttls.user_sessions()),
                || self.store.completed_sessions(user_id),
            )
            .await
    }

    /// Whether a paid report has been purchased for the session.
    #[instrument(skip(self), fields(operation = "has_user_paid_for_session"))]
    pub async fn has_user_paid_for_session(&self, session_id: &str) -> Result<bool> {
        self.cache
            .get_or_compute(
                &keys::session_has_paid(session_id),
                Some(self.ttls.has_paid()),
                || self.store.has_paid_report(session_id),
            )
            .await
    }

    /// Drop every cache entry derived from this session or its owner.
    ///
    /// Call whenever session state changes: an answer saved, the
    /// session completed, a payment confirmed. The set is enumerated by
    /// hand, not swept by wildcard; a new cache key derived from
    /// session or user state must be added to this list.
    #[instrument(skip(self), fields(operation = "invalidate_session_caches"))]
    pub fn invalidate_session_caches(&self, user_id: i64, session_id: &str) {
        let keys = [
            keys::session_with_answers(session_id),
            keys::session_has_paid(session_id),
            keys::survey_results(session_id, PaymentStatus::Free),
            keys::survey_results(session_id, PaymentStatus::Paid),
            keys::user_completed_count(user_id),
            keys::user_completed_sessions(user_id),
            keys::session_analytics(session_id),
        ];
        for key in &keys {
            self.cache.invalidate(key);
        }
        debug!(session_id, user_id, "session caches invalidated");
    }

    async fn render_report(&self, session_id: &str, tier: PaymentStatus) -> Result<Vec<u8>> {
        let results = self.composed_results(session_id, tier).await?;
        let bytes = self
            .renderer
            .render(&results, tier == PaymentStatus::Paid)
            .await?;
        debug!(
            session_id,
            renderer = self.renderer.name(),
            tier = tier.as_str(),
            bytes = bytes.len(),
            "report rendered"
        );
        Ok(bytes)
    }

    async fn composed_results(
        &self,
        session_id: &str,
        tier: PaymentStatus,
    ) -> Result<SurveyResults> {
        let bundle = self.validated_bundle(session_id).await?;
        self.cache
            .get_or_compute(
                &keys::survey_results(session_id, tier),
                Some(self.ttls.results()),
                || async {
                    let composer = ResultsComposer::new(&self.catalog);
                    Ok(composer.compose(
                        session_id,
                        &bundle.survey,
                        &bundle.answers,
                        tier == PaymentStatus::Paid,
                    ))
                },
            )
            .await
    }

    /// Session bundle through the cache, with answers validated.
    ///
    /// A missing session is never cached, so a session created moments
    /// later is not masked by a remembered absence.
    async fn validated_bundle(&self, session_id: &str) -> Result<SessionWithAnswers> {
        let bundle = self
            .cache
            .get_or_compute(
                &keys::session_with_answers(session_id),
                Some(self.ttls.session()),
                || self.store.session_with_answers(session_id),
            )
            .await?;

        match bundle
            .answers
            .iter()
            .find(|a| !scoring::validate_score(a.score))
        {
            Some(bad) => Err(ScorecardError::InvalidScore {
                question_id: bad.question_id,
                score: bad.score,
            }),
            None => Ok(bundle),
        }
    }
}

/// Record report outcome metrics (counter + histogram).
fn record_report(tier: PaymentStatus, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REPORTS_TOTAL,
        "kind" => tier.as_str(),
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REPORT_DURATION_SECONDS,
        "kind" => tier.as_str(),
    )
    .record(start.elapsed().as_secs_f64());
}
