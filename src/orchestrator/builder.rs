//! Builder for configuring orchestrator instances

use std::sync::Arc;

use crate::cache::QueryCache;
use crate::catalog::ReportCatalog;
use crate::config::TtlConfig;
use crate::error::{Result, ScorecardError};
use crate::traits::{ReportRenderer, SessionStore};

use super::ReportOrchestrator;

/// Builder for configuring orchestrator instances.
///
/// A store and a renderer are required; everything else defaults — an
/// empty catalog, a fresh cache, standard TTLs.
pub struct ReportOrchestratorBuilder {
    store: Option<Arc<dyn SessionStore>>,
    renderer: Option<Arc<dyn ReportRenderer>>,
    catalog: Option<ReportCatalog>,
    cache: Option<Arc<QueryCache>>,
    ttls: TtlConfig,
}

impl ReportOrchestratorBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            renderer: None,
            catalog: None,
            cache: None,
            ttls: TtlConfig::default(),
        }
    }

    /// Set the session store (required).
    pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the report renderer (required).
    pub fn renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Set the report content catalog.
    ///
    /// Without one, composition falls back to synthesized content on
    /// every lookup.
    pub fn catalog(mut self, catalog: ReportCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Share an existing cache instead of creating a fresh one.
    pub fn cache(mut self, cache: Arc<QueryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the per-family cache TTLs.
    pub fn ttls(mut self, ttls: TtlConfig) -> Self {
        self.ttls = ttls;
        self
    }

    /// Build the orchestrator.
    ///
    /// Fails with [`ScorecardError::NoStore`] or
    /// [`ScorecardError::NoRenderer`] when a required collaborator is
    /// missing.
    pub fn build(self) -> Result<ReportOrchestrator> {
        let store = self.store.ok_or(ScorecardError::NoStore)?;
        let renderer = self.renderer.ok_or(ScorecardError::NoRenderer)?;
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(QueryCache::with_default_ttl(self.ttls.default_ttl())));
        Ok(ReportOrchestrator::new(
            store,
            renderer,
            self.catalog.unwrap_or_default(),
            cache,
            self.ttls,
        ))
    }
}

impl Default for ReportOrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
