//! Central timer registry.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::name::MetricName;
use crate::timer::Timer;

/// Central registry resolving metric names to timers.
///
/// Lookup is idempotent: the same name always resolves to the same shared
/// [`Timer`] instance, created on first use. The registry is safe to share
/// across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    timers: DashMap<MetricName, Arc<Timer>>,
}

impl MetricsRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            timers: DashMap::new(),
        }
    }

    /// Resolve the timer registered under `name`, creating it on first use.
    pub fn timer(&self, name: MetricName) -> Arc<Timer> {
        if let Some(timer) = self.timers.get(&name) {
            return Arc::clone(timer.value());
        }

        debug!(metric = %name, "registering timer");
        Arc::clone(
            self.timers
                .entry(name)
                .or_insert_with(|| Arc::new(Timer::new()))
                .value(),
        )
    }

    /// Get the timer registered under `name`, if any.
    pub fn get(&self, name: &MetricName) -> Option<Arc<Timer>> {
        self.timers.get(name).map(|timer| Arc::clone(timer.value()))
    }

    /// Names of every registered timer.
    pub fn names(&self) -> Vec<MetricName> {
        self.timers.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Check whether the registry holds no timers.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every registered timer (for testing).
    pub fn reset(&self) {
        self.timers.clear();
    }
}

/// Shared metrics registry handle.
pub type SharedMetricsRegistry = Arc<MetricsRegistry>;

/// Create a new shared metrics registry.
pub fn new_shared_registry() -> SharedMetricsRegistry {
    Arc::new(MetricsRegistry::new())
}
