//! Cache freshness configuration.
//!
//! TTLs are expressed in milliseconds and grouped by query family, so a
//! deployment can trade staleness for load per family without touching
//! call sites. Session and result documents change rarely once a survey
//! is completed and tolerate five minutes; per-user listings drive
//! pricing and stay at one minute.

use std::time::Duration;

use serde::Deserialize;

/// TTLs for the orchestrator's cached query families.
#[derive(Debug, Clone, Deserialize)]
pub struct TtlConfig {
    /// Session-with-answers bundles in ms (default: 300000, 5 min).
    #[serde(default = "default_session_ttl_ms")]
    pub session_ttl_ms: u64,
    /// Composed result documents in ms (default: 300000, 5 min).
    #[serde(default = "default_results_ttl_ms")]
    pub results_ttl_ms: u64,
    /// Per-user completed-session counts in ms (default: 60000, 1 min).
    #[serde(default = "default_completed_count_ttl_ms")]
    pub completed_count_ttl_ms: u64,
    /// Payment-status lookups in ms (default: 300000, 5 min).
    #[serde(default = "default_has_paid_ttl_ms")]
    pub has_paid_ttl_ms: u64,
    /// Per-user completed-session listings in ms (default: 60000, 1 min).
    #[serde(default = "default_user_sessions_ttl_ms")]
    pub user_sessions_ttl_ms: u64,
    /// Fallback for cache writes with no explicit TTL (default: 60000).
    #[serde(default = "default_default_ttl_ms")]
    pub default_ttl_ms: u64,
}

impl TtlConfig {
    pub fn session(&self) -> Duration {
        Duration::from_millis(self.session_ttl_ms)
    }

    pub fn results(&self) -> Duration {
        Duration::from_millis(self.results_ttl_ms)
    }

    pub fn completed_count(&self) -> Duration {
        Duration::from_millis(self.completed_count_ttl_ms)
    }

    pub fn has_paid(&self) -> Duration {
        Duration::from_millis(self.has_paid_ttl_ms)
    }

    pub fn user_sessions(&self) -> Duration {
        Duration::from_millis(self.user_sessions_ttl_ms)
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            session_ttl_ms: default_session_ttl_ms(),
            results_ttl_ms: default_results_ttl_ms(),
            completed_count_ttl_ms: default_completed_count_ttl_ms(),
            has_paid_ttl_ms: default_has_paid_ttl_ms(),
            user_sessions_ttl_ms: default_user_sessions_ttl_ms(),
            default_ttl_ms: default_default_ttl_ms(),
        }
    }
}

fn default_session_ttl_ms() -> u64 {
    5 * 60 * 1000
}

fn default_results_ttl_ms() -> u64 {
    5 * 60 * 1000
}

fn default_completed_count_ttl_ms() -> u64 {
    60 * 1000
}

fn default_has_paid_ttl_ms() -> u64 {
    5 * 60 * 1000
}

fn default_user_sessions_ttl_ms() -> u64 {
    60 * 1000
}

fn default_default_ttl_ms() -> u64 {
    60 * 1000
}
