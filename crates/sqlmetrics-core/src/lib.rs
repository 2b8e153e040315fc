//! SQLMetrics Core - Metric names, timers, and the timer registry.
//!
//! This crate provides the timing primitives used to instrument statement
//! execution: a composite [`MetricName`] key, a sample-recording [`Timer`]
//! with a move-consuming measurement scope, and the [`MetricsRegistry`]
//! that resolves names to shared timer instances.
//!
//! # Quick Start
//!
//! ```
//! use sqlmetrics_core::{new_shared_registry, MetricName};
//!
//! let registry = new_shared_registry();
//!
//! // Resolve a timer and record one measurement interval.
//! let name = MetricName::discriminated("JdbcTemplate", "execute.StatementCallback", "SELECT 1");
//! let running = registry.timer(name.clone()).start();
//! // ... do the work being measured ...
//! let elapsed = running.stop();
//!
//! assert_eq!(registry.timer(name).count(), 1);
//! assert!(elapsed >= std::time::Duration::ZERO);
//! ```

pub mod name;
pub mod registry;
pub mod timer;

pub use name::MetricName;
pub use registry::{new_shared_registry, MetricsRegistry, SharedMetricsRegistry};
pub use timer::{RunningTimer, Timer};
