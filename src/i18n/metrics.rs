//! Lookup metrics for a registry.
//!
//! Counts where each translation lookup was answered from: the requested
//! language's table, the fallback table, or neither (the key was echoed).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a single registry.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered by the requested language's table
    active_hits: AtomicUsize,

    /// Lookups answered by the fallback language's table
    fallback_hits: AtomicUsize,

    /// Lookups that fell through to the literal key
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered by the requested language.
    pub fn record_active_hit(&self) {
        self.active_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup answered by the fallback language.
    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned the key itself.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn active_hits(&self) -> usize {
        self.active_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let active_hits = self.active_hits();
        let fallback_hits = self.fallback_hits();
        let misses = self.misses();
        let total_lookups = active_hits + fallback_hits + misses;
        let hit_rate = if total_lookups > 0 {
            ((active_hits + fallback_hits) as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_lookups,
            active_hits,
            fallback_hits,
            misses,
            hit_rate,
        }
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups recorded
    pub total_lookups: usize,

    /// Lookups answered by the requested language
    pub active_hits: usize,

    /// Lookups answered by the fallback language
    pub fallback_hits: usize,

    /// Lookups that returned the literal key
    pub misses: usize,

    /// Share of lookups answered by any table, as a percentage (0-100)
    pub hit_rate: f64,
}
